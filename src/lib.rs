pub use crate::diagnostics::{AksaraError, CompileError, ErrorCode, Namespace, Reporter};
pub use crate::engine::{translate, TranslateOptions, Translation, Translator};
pub use crate::syntax::{NodeKind, SyntaxNode, Token, TokenKind, Tokenizer};

pub mod cli;
pub mod diagnostics;
pub mod engine;
pub mod repl;
pub mod script;
pub mod syntax;
pub mod trace;
pub mod validation;
