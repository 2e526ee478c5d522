use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{AksaraError, CompileError, Reporter, DEFAULT_CONTEXT_WINDOW};
use crate::syntax::{Parser, SyntaxNode, Token, Tokenizer};
use crate::trace::{NullSink, TraceSink};
use crate::validation::OrthographyValidator;

// ============================================================================
// OPTIONS
// ============================================================================

/// Settings for one translation. Missing fields in a config file fall back to
/// the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateOptions {
    /// Radius, in chars, of the context snippet stored with each error.
    pub context_window: usize,
    /// Keep the token list in the [`Translation`].
    pub include_tokens: bool,
    /// Emit phase trace lines.
    pub trace: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            context_window: DEFAULT_CONTEXT_WINDOW,
            include_tokens: false,
            trace: false,
        }
    }
}

impl TranslateOptions {
    /// Loads options from a JSON config file.
    pub fn load(path: &Path) -> Result<Self, AksaraError> {
        let text = read_source(path)?;
        Self::from_json(&text).map_err(|source| AksaraError::Config {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Reads a UTF-8 source or config file.
pub fn read_source(path: &Path) -> Result<String, AksaraError> {
    std::fs::read_to_string(path).map_err(|source| AksaraError::Io {
        path: path.display().to_string(),
        source,
    })
}

// ============================================================================
// TRANSLATION
// ============================================================================

/// Everything produced for one input text.
#[derive(Debug, Clone, Serialize)]
pub struct Translation<'src> {
    pub source: &'src str,
    pub latin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Token<'src>>>,
    pub tree: SyntaxNode,
    /// Validator errors first, then parser errors, each in discovery order.
    pub errors: Vec<CompileError>,
}

impl Translation<'_> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Runs the orthography validator and the parser over one text.
///
/// Each pass tokenizes the source independently; both report into one
/// [`Reporter`] so their diagnostics end up in a single list.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    pub fn new(options: TranslateOptions) -> Self {
        Self { options }
    }

    pub fn translate<'src>(&self, source: &'src str) -> Translation<'src> {
        self.translate_with(source, &mut NullSink)
    }

    /// Like [`Translator::translate`], sending phase trace lines to `sink`
    /// when tracing is enabled.
    pub fn translate_with<'src>(
        &self,
        source: &'src str,
        sink: &mut dyn TraceSink,
    ) -> Translation<'src> {
        let trace = self.options.trace;
        let mut reporter = Reporter::with_context_window(source, self.options.context_window);

        let tokens: Option<Vec<Token<'src>>> = (self.options.include_tokens || trace)
            .then(|| Tokenizer::new(source).collect());
        if trace {
            sink.emit("=== TOKENS ===");
            for token in tokens.iter().flatten() {
                sink.emit(&token.table_row());
            }
            sink.emit("=== ORTHOGRAPHY ===");
        }

        let mut validator = OrthographyValidator::new(&mut reporter);
        if trace {
            validator = validator.with_trace(&mut *sink);
        }
        validator.validate(source);

        if trace {
            sink.emit("=== PARSE ===");
        }
        let mut parser = Parser::new(source, &mut reporter);
        if trace {
            parser = parser.with_trace(&mut *sink);
        }
        let tree = parser.parse();

        let errors = reporter.into_errors();
        if trace {
            sink.emit("=== RESULT ===");
            sink.emit(&tree.value);
            sink.emit(&format!("{} diagnostic(s)", errors.len()));
        }

        Translation {
            source,
            latin: tree.value.clone(),
            tokens: tokens.filter(|_| self.options.include_tokens),
            tree,
            errors,
        }
    }
}

/// Translates `source` with default options.
pub fn translate(source: &str) -> Translation<'_> {
    Translator::default().translate(source)
}
