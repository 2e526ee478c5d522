//! Diagnostics for the Aksara pipeline.
//!
//! # Overview
//!
//! Two families of errors live here:
//!
//! - [`CompileError`]: non-fatal findings about the input text. The tokenizer,
//!   parser and orthography validator never fail; they record compile errors
//!   in a [`Reporter`] and keep going, so every translation yields a complete
//!   tree plus a complete diagnostic list.
//! - [`AksaraError`]: fatal failures of the surrounding tooling (reading files,
//!   loading configuration, encoding JSON). These are returned with `?`.
//!
//! [`SourcedDiagnostic`] pairs a compile error with its source text so that
//! `miette` can render it graphically.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::syntax::{Span, Token};

/// Default radius, in chars, of the context snippet stored with each error.
pub const DEFAULT_CONTEXT_WINDOW: usize = 12;

// ============================================================================
// ERROR CODES
// ============================================================================

/// The pass family an error code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Unrecognized graphemes.
    Lex,
    /// Grammar violations found by the parser.
    Syn,
    /// Placement violations found by the orthography validator.
    Ort,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Lex => "LEX",
            Namespace::Syn => "SYN",
            Namespace::Ort => "ORT",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every compile error the pipeline can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Illegal character.
    Lex001,
    /// Unexpected token at program level.
    Syn000,
    /// A production expected a different token kind.
    Syn001,
    /// Diacritic or virama without a base consonant.
    Syn002,
    /// Subjoined consonant without a base consonant.
    Syn003,
    /// Vowel or final mark without a base consonant.
    Ort001,
    /// Virama without a base consonant.
    Ort002,
    /// More than one vowel mark on a syllable.
    Ort003,
    /// Vowel mark after virama.
    Ort004,
    /// Final mark after virama.
    Ort005,
    /// Cluster without a base consonant.
    Ort007,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lex001 => "LEX001",
            Self::Syn000 => "SYN000",
            Self::Syn001 => "SYN001",
            Self::Syn002 => "SYN002",
            Self::Syn003 => "SYN003",
            Self::Ort001 => "ORT001",
            Self::Ort002 => "ORT002",
            Self::Ort003 => "ORT003",
            Self::Ort004 => "ORT004",
            Self::Ort005 => "ORT005",
            Self::Ort007 => "ORT007",
        }
    }

    pub const fn namespace(&self) -> Namespace {
        match self {
            Self::Lex001 => Namespace::Lex,
            Self::Syn000 | Self::Syn001 | Self::Syn002 | Self::Syn003 => Namespace::Syn,
            Self::Ort001
            | Self::Ort002
            | Self::Ort003
            | Self::Ort004
            | Self::Ort005
            | Self::Ort007 => Namespace::Ort,
        }
    }

    /// Short advice shown by graphical renderers.
    pub fn help(&self) -> &'static str {
        match self {
            Self::Lex001 => "only Javanese letters, signs, pada and whitespace are recognized",
            Self::Syn000 => "a sentence cannot begin with punctuation",
            Self::Syn001 => "the token was skipped",
            Self::Syn002 => "write the sign directly after the consonant it modifies",
            Self::Syn003 => "a pasangan stacks under a preceding base consonant",
            Self::Ort001 => "attach the mark to a base consonant",
            Self::Ort002 => "pangkon can only close a consonant",
            Self::Ort003 => "a syllable carries at most one vowel sign",
            Self::Ort004 => "pangkon removes the vowel, so no vowel sign may follow it",
            Self::Ort005 => "final marks go before the pangkon",
            Self::Ort007 => "write the pasangan after a base consonant",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// COMPILE ERRORS
// ============================================================================

/// A single non-fatal finding, anchored at the token that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileError {
    pub code: ErrorCode,
    pub message: String,
    /// Char index of the offending token.
    pub offset: usize,
    /// Byte span of the offending token.
    pub span: Span,
    pub line: usize,
    pub column: usize,
    pub token_text: String,
    /// Source window around `offset` with newlines escaped.
    pub context: String,
    /// Char index where `context` begins.
    pub context_start: usize,
}

impl CompileError {
    pub fn namespace(&self) -> Namespace {
        self.code.namespace()
    }

    /// One-line rendering: `[CODE] line L, col C (idx I): message 'token'`.
    pub fn format(&self) -> String {
        let location = format!("line {}, col {} (idx {})", self.line, self.column, self.offset);
        let value = if self.token_text.is_empty() {
            String::new()
        } else {
            format!(" '{}'", self.token_text)
        };
        format!("[{}] {}: {}{}", self.code, location, self.message, value)
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

// ============================================================================
// REPORTER
// ============================================================================

/// Collects compile errors for one translation unit.
///
/// Both the parser and the orthography validator write into the same reporter;
/// errors keep the order in which they were added.
#[derive(Debug, Clone)]
pub struct Reporter {
    source: String,
    context_window: usize,
    errors: Vec<CompileError>,
}

impl Reporter {
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_context_window(source, DEFAULT_CONTEXT_WINDOW)
    }

    pub fn with_context_window(source: impl Into<String>, context_window: usize) -> Self {
        Self {
            source: source.into(),
            context_window,
            errors: Vec::new(),
        }
    }

    /// Records an error at `token`'s position.
    pub fn add(&mut self, code: ErrorCode, message: impl Into<String>, token: &Token<'_>) {
        let (context_start, context) = self.snippet(token.offset, token.span.start);
        self.errors.push(CompileError {
            code,
            message: message.into(),
            offset: token.offset,
            span: token.span,
            line: token.line,
            column: token.column,
            token_text: token.raw.to_string(),
            context,
            context_start,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &CompileError> {
        self.errors.iter()
    }

    pub fn into_errors(self) -> Vec<CompileError> {
        self.errors
    }

    /// Window of `context_window` chars either side of the char at `offset`,
    /// which starts at byte `at`. Only the window itself is walked.
    fn snippet(&self, offset: usize, at: usize) -> (usize, String) {
        let radius = self.context_window;
        let (Some(before), Some(after)) = (self.source.get(..at), self.source.get(at..)) else {
            return (offset, String::new());
        };

        let mut back = 0;
        let mut start = at;
        for (index, _) in before.char_indices().rev().take(radius) {
            back += 1;
            start = index;
        }
        let end = after
            .char_indices()
            .nth(radius)
            .map_or(self.source.len(), |(index, _)| at + index);

        (offset.saturating_sub(back), self.source[start..end].replace('\n', "\\n"))
    }
}

// ============================================================================
// FATAL ERRORS
// ============================================================================

/// Failures of the tooling around the core pipeline.
#[derive(Debug, Error)]
pub enum AksaraError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration in '{path}': {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// MIETTE BRIDGE
// ============================================================================

/// A compile error paired with the text it was found in, for `miette` rendering.
#[derive(Debug, Error)]
#[error("{}", .error.message)]
pub struct SourcedDiagnostic<'a> {
    error: &'a CompileError,
    input: NamedSource<String>,
}

impl<'a> SourcedDiagnostic<'a> {
    pub fn new(error: &'a CompileError, name: &str, source: &str) -> Self {
        Self {
            error,
            input: NamedSource::new(name, source.to_string()),
        }
    }
}

impl Diagnostic for SourcedDiagnostic<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        Some(Box::new(self.error.code))
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        Some(Box::new(self.error.code.help()))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.input)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.error.span;
        let label = LabeledSpan::new(
            Some(format!("{} here", self.error.code.namespace())),
            span.start,
            span.len(),
        );
        Some(Box::new(std::iter::once(label)))
    }
}
