//! Aksara tokenizer
//!
//! Pull-based: every call to [`Tokenizer::next_token`] scans exactly one token
//! and advances the cursor past it. The stream is total; characters that match
//! no table become single-char `Unknown` tokens instead of being dropped.

use crate::script::{self, FOREIGN_SOUND_MARKER, VIRAMA};
use crate::syntax::token::{Token, TokenKind};
use crate::syntax::Span;

/// Cursor over one source text.
///
/// A tokenizer belongs to exactly one pass over one input; it is never shared.
#[derive(Debug, Clone)]
pub struct Tokenizer<'src> {
    source: &'src str,
    /// Byte position of the cursor.
    pos: usize,
    /// Char position of the cursor.
    offset: usize,
    line: usize,
    column: usize,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the whole input, including the trailing `EndOfInput` sentinel.
    pub fn tokenize(source: &'src str) -> Vec<Token<'src>> {
        let mut tokenizer = Self::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.next_token();
            let done = token.is_end();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scans the next token. Once the input is exhausted this keeps returning
    /// an `EndOfInput` token at the final position.
    pub fn next_token(&mut self) -> Token<'src> {
        if self.is_at_end() {
            return self.end_token();
        }

        let rest = &self.source[self.pos..];
        let (kind, len, latin) = scan(rest);
        let raw = &rest[..len];

        let token = Token {
            kind,
            raw,
            // Unknown graphemes transliterate to themselves.
            latin: latin.unwrap_or(raw),
            offset: self.offset,
            span: Span::new(self.pos, self.pos + len),
            line: self.line,
            column: self.column,
        };
        self.advance_over(raw);
        token
    }

    fn end_token(&self) -> Token<'src> {
        let end = self.source.len();
        Token {
            kind: TokenKind::EndOfInput,
            raw: &self.source[end..],
            latin: "",
            offset: self.offset,
            span: Span::new(end, end),
            line: self.line,
            column: self.column,
        }
    }

    fn advance_over(&mut self, raw: &str) {
        for ch in raw.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.offset += 1;
        }
        self.pos += raw.len();
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    /// Yields every token except the `EndOfInput` sentinel.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}

// ============================================================================
// MATCHING
// ============================================================================

/// Matches one token at the start of `rest`, which must be non-empty.
///
/// Returns the kind, the byte length of the match, and the Latin value
/// (`None` for `Unknown`). Alternatives are ordered most specific first:
/// virama + consonant before a bare virama, consonant + marker before a bare
/// consonant.
fn scan(rest: &str) -> (TokenKind, usize, Option<&'static str>) {
    let mut chars = rest.chars();
    let Some(first) = chars.next() else {
        return (TokenKind::EndOfInput, 0, Some(""));
    };
    let second = chars.next();
    let third = chars.next();

    if first.is_whitespace() {
        let len = rest
            .char_indices()
            .find(|(_, c)| !c.is_whitespace())
            .map_or(rest.len(), |(i, _)| i);
        return (TokenKind::Space, len, Some(" "));
    }

    if let Some(latin) = script::punctuation(first) {
        return (TokenKind::Punctuation, first.len_utf8(), Some(latin));
    }

    if first == VIRAMA {
        if let Some(base) = second.filter(|c| script::is_consonant(*c)) {
            let marked = script::takes_marker(base) && third == Some(FOREIGN_SOUND_MARKER);
            let mut len = first.len_utf8() + base.len_utf8();
            if marked {
                len += FOREIGN_SOUND_MARKER.len_utf8();
            }
            return (
                TokenKind::SubjoinedConsonant,
                len,
                Some(script::consonant_latin(base, marked)),
            );
        }
        return (TokenKind::Virama, first.len_utf8(), Some(""));
    }

    if let Some(latin) = script::vowel_sign(first) {
        return (TokenKind::VowelDiacritic, first.len_utf8(), Some(latin));
    }

    if let Some(latin) = script::final_sign(first) {
        return (TokenKind::FinalDiacritic, first.len_utf8(), Some(latin));
    }

    if script::is_consonant(first) {
        let marked = script::takes_marker(first) && second == Some(FOREIGN_SOUND_MARKER);
        let mut len = first.len_utf8();
        if marked {
            len += FOREIGN_SOUND_MARKER.len_utf8();
        }
        return (
            TokenKind::Consonant,
            len,
            Some(script::consonant_latin(first, marked)),
        );
    }

    if let Some(latin) = script::vowel(first) {
        return (TokenKind::Vowel, first.len_utf8(), Some(latin));
    }

    (TokenKind::Unknown, first.len_utf8(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KA: char = '\u{A98F}';
    const TA: char = '\u{A9A0}';
    const SUKU: char = '\u{A9B8}';

    fn kinds(source: &str) -> Vec<TokenKind> {
        Tokenizer::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_subjoined_consonant_is_one_token() {
        let source = format!("{KA}{VIRAMA}{TA}");
        let tokens: Vec<_> = Tokenizer::new(&source).collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::SubjoinedConsonant);
        assert_eq!(tokens[1].latin, "t");
        assert_eq!(tokens[1].offset, 1);
    }

    #[test]
    fn test_subjoined_consonant_with_marker() {
        let source = format!("{TA}{VIRAMA}{KA}{FOREIGN_SOUND_MARKER}");
        let tokens: Vec<_> = Tokenizer::new(&source).collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::SubjoinedConsonant);
        assert_eq!(tokens[1].latin, "kh");
    }

    #[test]
    fn test_marker_on_ineligible_consonant_is_unknown() {
        let source = format!("{TA}{FOREIGN_SOUND_MARKER}");
        assert_eq!(kinds(&source), [TokenKind::Consonant, TokenKind::Unknown]);
    }

    #[test]
    fn test_trailing_virama_is_bare() {
        let source = format!("{KA}{VIRAMA}");
        let tokens: Vec<_> = Tokenizer::new(&source).collect();
        assert_eq!(tokens[1].kind, TokenKind::Virama);
        assert_eq!(tokens[1].latin, "");
    }

    #[test]
    fn test_space_run_tracks_lines() {
        let source = format!("{KA} \n\t{KA}{SUKU}");
        let tokens: Vec<_> = Tokenizer::new(&source).collect();
        assert_eq!(tokens[1].kind, TokenKind::Space);
        assert_eq!(tokens[1].raw, " \n\t");
        assert_eq!(tokens[1].latin, " ");
        assert_eq!(tokens[2].line, 2);
        assert_eq!(tokens[2].column, 2);
        assert_eq!(tokens[2].offset, 4);
        assert_eq!(tokens[3].column, 3);
    }

    #[test]
    fn test_unknown_latin_is_raw() {
        let tokens: Vec<_> = Tokenizer::new("x").collect();
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].latin, "x");
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let source = format!("{KA}");
        let mut tokenizer = Tokenizer::new(&source);
        assert_eq!(tokenizer.next_token().kind, TokenKind::Consonant);
        let first_end = tokenizer.next_token();
        let second_end = tokenizer.next_token();
        assert!(first_end.is_end());
        assert_eq!(first_end, second_end);
        assert_eq!(first_end.offset, 1);
        assert_eq!(first_end.span, Span::new(3, 3));
    }

    #[test]
    fn test_tokenize_includes_sentinel() {
        let tokens = Tokenizer::tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_end());
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    }

    #[test]
    fn test_spans_are_contiguous() {
        let source = format!("{KA}{SUKU} a{VIRAMA}{TA}\u{A9CB}");
        let tokens = Tokenizer::tokenize(&source);
        let mut expected_start = 0;
        for token in &tokens {
            assert_eq!(token.span.start, expected_start);
            assert_eq!(&source[token.span.start..token.span.end], token.raw);
            expected_start = token.span.end;
        }
        assert_eq!(expected_start, source.len());
    }
}
