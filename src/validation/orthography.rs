//! Orthography validator.
//!
//! A linear scan over a fresh token stream that checks where signs may be
//! placed relative to their base consonant. It keeps four flags describing the
//! syllable in progress and resets them at every consonant, independent vowel,
//! space and pada.

use crate::diagnostics::{ErrorCode, Reporter};
use crate::syntax::{Token, TokenKind, Tokenizer};
use crate::trace::TraceSink;

/// What the validator has seen since the last syllable boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyllableState {
    pub have_base: bool,
    pub seen_vowel_mark: bool,
    pub seen_virama: bool,
    pub seen_final_mark: bool,
}

impl SyllableState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

pub struct OrthographyValidator<'r> {
    reporter: &'r mut Reporter,
    trace: Option<&'r mut dyn TraceSink>,
    state: SyllableState,
}

impl<'r> OrthographyValidator<'r> {
    pub fn new(reporter: &'r mut Reporter) -> Self {
        Self {
            reporter,
            trace: None,
            state: SyllableState::default(),
        }
    }

    /// Routes one trace line per token to `sink`.
    pub fn with_trace(mut self, sink: &'r mut dyn TraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Scans `source` to the end and returns the state after the last token.
    pub fn validate(mut self, source: &str) -> SyllableState {
        let mut tokenizer = Tokenizer::new(source);
        loop {
            let token = tokenizer.next_token();
            if token.is_end() {
                break;
            }
            self.check(&token);
            self.trace_state(&token);
        }
        self.state
    }

    fn check(&mut self, token: &Token<'_>) {
        match token.kind {
            TokenKind::Consonant => {
                self.state.reset();
                self.state.have_base = true;
            }
            TokenKind::SubjoinedConsonant => {
                if !self.state.have_base {
                    self.report(
                        ErrorCode::Ort007,
                        "Subjoined consonant (pasangan) must follow a base consonant",
                        token,
                    );
                }
            }
            TokenKind::VowelDiacritic => {
                if !self.state.have_base {
                    self.report(
                        ErrorCode::Ort001,
                        "Vowel diacritic must follow a base consonant",
                        token,
                    );
                }
                if self.state.seen_vowel_mark {
                    self.report(
                        ErrorCode::Ort003,
                        "Multiple vowel diacritics on one base consonant",
                        token,
                    );
                }
                if self.state.seen_virama {
                    self.report(
                        ErrorCode::Ort004,
                        "Vowel diacritic cannot appear after pangkon",
                        token,
                    );
                }
                self.state.seen_vowel_mark = true;
            }
            TokenKind::Virama => {
                if !self.state.have_base {
                    self.report(ErrorCode::Ort002, "Pangkon must follow a base consonant", token);
                }
                self.state.seen_virama = true;
            }
            TokenKind::FinalDiacritic => {
                if !self.state.have_base {
                    self.report(
                        ErrorCode::Ort001,
                        "Final consonant mark must follow a base consonant",
                        token,
                    );
                }
                if self.state.seen_virama {
                    self.report(
                        ErrorCode::Ort005,
                        "Final consonant mark cannot appear after pangkon",
                        token,
                    );
                }
                self.state.seen_final_mark = true;
            }
            TokenKind::Unknown => self.report(ErrorCode::Lex001, "Illegal character", token),
            TokenKind::Vowel | TokenKind::Space | TokenKind::Punctuation => self.state.reset(),
            TokenKind::EndOfInput => {}
        }
    }

    fn report(&mut self, code: ErrorCode, message: &str, token: &Token<'_>) {
        self.reporter.add(code, message, token);
    }

    fn trace_state(&mut self, token: &Token<'_>) {
        if let Some(sink) = self.trace.as_deref_mut() {
            let s = self.state;
            sink.emit(&format!(
                "[validator] {} '{}' at {}: base={} vowel={} virama={} final={}",
                token.kind,
                token.raw.escape_debug(),
                token.pos_str(),
                s.have_base,
                s.seen_vowel_mark,
                s.seen_virama,
                s.seen_final_mark
            ));
        }
    }
}
