use serde::Serialize;

use crate::syntax::Span;

/// The lexical class of a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A base consonant, optionally fused with the foreign-sound marker.
    Consonant,
    /// An independent vowel (aksara swara).
    Vowel,
    /// A vowel sign attached to a consonant (sandhangan swara).
    VowelDiacritic,
    /// A final-consonant sign (sandhangan panyigeg).
    FinalDiacritic,
    /// A bare pangkon.
    Virama,
    /// Pangkon fused with the consonant that follows it (pasangan).
    SubjoinedConsonant,
    /// A run of whitespace.
    Space,
    /// A pada mark.
    Punctuation,
    /// Anything the tables do not cover. Always a single char.
    Unknown,
    EndOfInput,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Consonant => "CONSONANT",
            TokenKind::Vowel => "VOWEL",
            TokenKind::VowelDiacritic => "VOWEL_DIACRITIC",
            TokenKind::FinalDiacritic => "FINAL_DIACRITIC",
            TokenKind::Virama => "VIRAMA",
            TokenKind::SubjoinedConsonant => "SUBJOINED_CONSONANT",
            TokenKind::Space => "SPACE",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::EndOfInput => "END_OF_INPUT",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single token borrowed from the source text.
///
/// `offset` counts chars from the start of the input; `span` is the byte
/// range of `raw` within the same input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub raw: &'src str,
    pub latin: &'src str,
    pub offset: usize,
    pub span: Span,
    pub line: usize,
    pub column: usize,
}

impl<'src> Token<'src> {
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Human-readable position, e.g. `line 1, col 4 (idx 3)`.
    pub fn pos_str(&self) -> String {
        format!("line {}, col {} (idx {})", self.line, self.column, self.offset)
    }

    /// One row of a token table: kind, raw text, Latin value, position.
    pub fn table_row(&self) -> String {
        format!(
            "{:<20} {:<10} {:<6} {}",
            self.kind.as_str(),
            format!("'{}'", self.raw.escape_debug()),
            format!("'{}'", self.latin.escape_debug()),
            self.pos_str()
        )
    }
}
