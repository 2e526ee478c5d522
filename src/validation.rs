//! Validation passes that run alongside the parser.
//!
//! Validators re-tokenize the source on their own and report into the shared
//! [`Reporter`](crate::diagnostics::Reporter); they never touch the syntax tree.

pub mod orthography;

pub use orthography::{OrthographyValidator, SyllableState};
