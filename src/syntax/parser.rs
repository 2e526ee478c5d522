//! Aksara parser - recursive descent over the token stream.
//!
//! Pulls tokens from its own [`Tokenizer`] one at a time and builds a
//! [`SyntaxNode`] tree, romanizing each syllable as it goes. The parser never
//! fails: problems are recorded in the [`Reporter`] and the offending token is
//! skipped, so every input yields a complete Program tree.

use crate::diagnostics::{ErrorCode, Reporter};
use crate::script::INHERENT_VOWEL;
use crate::syntax::{NodeKind, SyntaxNode, Token, TokenKind, Tokenizer};
use crate::trace::TraceSink;

/// A production gave up. The error is already recorded and at least one token
/// was consumed, so the caller only has to carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skipped;

type Production = Result<SyntaxNode, Skipped>;

pub struct Parser<'src, 'r> {
    tokenizer: Tokenizer<'src>,
    current: Token<'src>,
    reporter: &'r mut Reporter,
    trace: Option<&'r mut dyn TraceSink>,
}

// ============================================================================
// PUBLIC API
// ============================================================================

impl<'src, 'r> Parser<'src, 'r> {
    pub fn new(source: &'src str, reporter: &'r mut Reporter) -> Self {
        let mut tokenizer = Tokenizer::new(source);
        let current = tokenizer.next_token();
        Self {
            tokenizer,
            current,
            reporter,
            trace: None,
        }
    }

    /// Routes parser trace lines to `sink`.
    pub fn with_trace(mut self, sink: &'r mut dyn TraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Program -> Sentence* EndOfInput
    pub fn parse(mut self) -> SyntaxNode {
        let mut sentences = Vec::new();
        loop {
            match self.current.kind {
                TokenKind::EndOfInput => break,
                TokenKind::SubjoinedConsonant => self.skip_orphan_cluster(),
                TokenKind::Punctuation => {
                    self.error(ErrorCode::Syn000, "Unexpected token at program level");
                    self.advance();
                }
                TokenKind::Consonant
                | TokenKind::Vowel
                | TokenKind::VowelDiacritic
                | TokenKind::FinalDiacritic
                | TokenKind::Virama
                | TokenKind::Space
                | TokenKind::Unknown => sentences.push(self.parse_sentence()),
            }
        }

        let program = SyntaxNode::from_children(NodeKind::Program, sentences);
        self.trace(|_| format!("[parser] tree:\n{}", program.render_tree().trim_end()));
        program
    }
}

// ============================================================================
// PRODUCTIONS
// ============================================================================

impl<'src, 'r> Parser<'src, 'r> {
    /// Sentence -> (Word (Space Word)*) Punctuation?
    ///
    /// Always yields a Sentence, even when every token in it was rejected.
    fn parse_sentence(&mut self) -> SyntaxNode {
        let mut children = Vec::new();
        loop {
            match self.current.kind {
                TokenKind::Consonant
                | TokenKind::Vowel
                | TokenKind::VowelDiacritic
                | TokenKind::FinalDiacritic
                | TokenKind::Virama => {
                    if let Ok(word) = self.parse_word() {
                        children.push(word);
                    }
                }
                TokenKind::SubjoinedConsonant => self.skip_orphan_cluster(),
                TokenKind::Space => {
                    let space = self.advance();
                    children.push(make_leaf(NodeKind::Space, space.latin));
                }
                TokenKind::Unknown => {
                    self.error(ErrorCode::Lex001, "Illegal character");
                    self.advance();
                }
                TokenKind::Punctuation | TokenKind::EndOfInput => break,
            }
        }

        if self.current.kind == TokenKind::Punctuation {
            let pada = self.advance();
            children.push(make_leaf(NodeKind::Punctuation, pada.latin));
        }

        SyntaxNode::from_children(NodeKind::Sentence, children)
    }

    /// Word -> SyllableGroup+
    ///
    /// Greedy: failed syllables are dropped and the loop retries on the next
    /// token. Stops without consuming at anything that cannot start a syllable.
    fn parse_word(&mut self) -> Production {
        let mut syllables = Vec::new();
        while starts_syllable(self.current.kind) {
            if let Ok(syllable) = self.parse_syllable() {
                syllables.push(syllable);
            }
        }

        if syllables.is_empty() {
            return Err(Skipped);
        }
        Ok(SyntaxNode::from_children(NodeKind::Word, syllables))
    }

    /// SyllableGroup -> ConsonantGroup | VowelGroup
    fn parse_syllable(&mut self) -> Production {
        match self.current.kind {
            TokenKind::Vowel => self.parse_vowel_group(),
            TokenKind::SubjoinedConsonant => {
                self.skip_orphan_cluster();
                Err(Skipped)
            }
            TokenKind::VowelDiacritic | TokenKind::FinalDiacritic | TokenKind::Virama => {
                self.error(
                    ErrorCode::Syn002,
                    "Invalid diacritic order: diacritic/pangkon cannot appear without a base consonant (orphan diacritic)",
                );
                self.advance();
                Err(Skipped)
            }
            // Anything else is rejected by `expect` inside the consonant group.
            TokenKind::Consonant
            | TokenKind::Space
            | TokenKind::Punctuation
            | TokenKind::Unknown
            | TokenKind::EndOfInput => self.parse_consonant_group(),
        }
    }

    /// VowelGroup -> Vowel
    fn parse_vowel_group(&mut self) -> Production {
        let vowel = self.expect(TokenKind::Vowel)?;
        Ok(make_leaf(NodeKind::Syllable, vowel.latin))
    }

    /// ConsonantGroup -> Consonant Cluster* VowelMark? FinalMark* DeadMark?
    fn parse_consonant_group(&mut self) -> Production {
        let base = self.expect(TokenKind::Consonant)?;
        let mut latin = String::from(base.latin);

        while let Some(cluster) = self.eat(TokenKind::SubjoinedConsonant) {
            latin.push_str(cluster.latin);
        }

        let vowel_mark = self.eat(TokenKind::VowelDiacritic).map(|t| t.latin);

        let mut finals = String::new();
        while let Some(mark) = self.eat(TokenKind::FinalDiacritic) {
            finals.push_str(mark.latin);
        }

        // A dead syllable keeps its final marks but loses every vowel.
        if self.eat(TokenKind::Virama).is_none() {
            latin.push_str(vowel_mark.unwrap_or(INHERENT_VOWEL));
        }
        latin.push_str(&finals);

        Ok(make_leaf(NodeKind::Syllable, latin))
    }
}

// ============================================================================
// TOKEN CURSOR
// ============================================================================

impl<'src, 'r> Parser<'src, 'r> {
    /// Moves to the next token and returns the one just left.
    fn advance(&mut self) -> Token<'src> {
        let next = self.tokenizer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Consumes the current token when it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> Option<Token<'src>> {
        if self.current.kind == kind {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes a token of the given kind, or records SYN001 and skips the
    /// current token.
    fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>, Skipped> {
        self.trace(|current| {
            format!(
                "[parser] expect {} at {}: found {} '{}'",
                kind,
                current.pos_str(),
                current.kind,
                current.raw.escape_debug()
            )
        });
        if let Some(token) = self.eat(kind) {
            return Ok(token);
        }
        let message = format!("Unexpected token {}, expected {}", self.current.kind, kind);
        self.error(ErrorCode::Syn001, message);
        self.advance();
        Err(Skipped)
    }

    fn skip_orphan_cluster(&mut self) {
        self.error(
            ErrorCode::Syn003,
            "Orphan cluster: subjoined consonant cannot start a word",
        );
        self.advance();
    }

    /// Records an error at the current token.
    fn error(&mut self, code: ErrorCode, message: impl Into<String>) {
        let message = message.into();
        self.trace(|current| format!("[parser] error {} at {}: {}", code, current.pos_str(), message));
        self.reporter.add(code, message, &self.current);
    }

    /// Emits a trace line built from the current token, if tracing is on.
    fn trace(&mut self, line: impl FnOnce(&Token<'src>) -> String) {
        if let Some(sink) = self.trace.as_deref_mut() {
            sink.emit(&line(&self.current));
        }
    }
}

// ============================================================================
// NODE BUILDERS
// ============================================================================

fn make_leaf(kind: NodeKind, value: impl Into<String>) -> SyntaxNode {
    SyntaxNode::new(kind, value, Vec::new())
}

fn starts_syllable(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Consonant
            | TokenKind::Vowel
            | TokenKind::VowelDiacritic
            | TokenKind::FinalDiacritic
            | TokenKind::Virama
            | TokenKind::SubjoinedConsonant
    )
}
