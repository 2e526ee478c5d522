//! Syntax module for Aksara
//!
//! Holds the source span type and the syntax tree produced by the parser.
//! Tokens, the tokenizer and the parser itself live in the submodules.

use serde::Serialize;

pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::Tokenizer;
pub use parser::{Parser, Skipped};
pub use token::{Token, TokenKind};

/// Longest node value shown by [`SyntaxNode::render_tree`] before truncation.
const RENDER_VALUE_LIMIT: usize = 60;

/// Represents a byte span in the source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The kind of a syntax tree node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Program,
    Sentence,
    Word,
    Syllable,
    Punctuation,
    Space,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Program => "PROGRAM",
            NodeKind::Sentence => "SENTENCE",
            NodeKind::Word => "WORD",
            NodeKind::Syllable => "SYLLABLE",
            NodeKind::Punctuation => "PUNCTUATION",
            NodeKind::Space => "SPACE",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node of the transliteration tree.
///
/// `value` is the Latin rendering of the node. For branch nodes it is the
/// concatenation of the children's values; Syllable, Space and Punctuation
/// nodes are leaves carrying their own value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub value: String,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a node with an explicit value and child list.
    pub fn new(kind: NodeKind, value: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        Self {
            kind,
            value: value.into(),
            children,
        }
    }

    /// Creates a branch node whose value is derived from its children.
    pub fn from_children(kind: NodeKind, children: Vec<SyntaxNode>) -> Self {
        let value = children.iter().map(|c| c.value.as_str()).collect();
        Self {
            kind,
            value,
            children,
        }
    }

    /// Collects every node of the given kind, depth-first.
    pub fn find_all(&self, kind: NodeKind) -> Vec<&SyntaxNode> {
        let mut found = Vec::new();
        self.collect_kind(kind, &mut found);
        found
    }

    fn collect_kind<'a>(&'a self, kind: NodeKind, found: &mut Vec<&'a SyntaxNode>) {
        if self.kind == kind {
            found.push(self);
        }
        for child in &self.children {
            child.collect_kind(kind, found);
        }
    }

    /// Renders the tree with box-drawing connectors, one node per line.
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, "", true);
        out
    }

    fn render_into(&self, out: &mut String, prefix: &str, is_last: bool) {
        let connector = if is_last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(self.kind.as_str());
        if !self.value.is_empty() {
            out.push_str(&format!(" ('{}')", truncate_value(&self.value)));
        }
        out.push('\n');

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        let last = self.children.len().saturating_sub(1);
        for (i, child) in self.children.iter().enumerate() {
            child.render_into(out, &child_prefix, i == last);
        }
    }
}

fn truncate_value(value: &str) -> String {
    let shown = value.replace('\n', "\\n");
    if shown.chars().count() > RENDER_VALUE_LIMIT {
        let head: String = shown.chars().take(RENDER_VALUE_LIMIT).collect();
        format!("{}...", head)
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syllable(value: &str) -> SyntaxNode {
        SyntaxNode::new(NodeKind::Syllable, value, Vec::new())
    }

    #[test]
    fn test_from_children_concatenates_values() {
        let word = SyntaxNode::from_children(NodeKind::Word, vec![syllable("ma"), syllable("ngan")]);
        assert_eq!(word.value, "mangan");
        assert_eq!(word.children.len(), 2);
    }

    #[test]
    fn test_render_tree_connectors() {
        let word = SyntaxNode::from_children(NodeKind::Word, vec![syllable("ku")]);
        let space = SyntaxNode::new(NodeKind::Space, " ", Vec::new());
        let sentence = SyntaxNode::from_children(NodeKind::Sentence, vec![word, space]);
        let program = SyntaxNode::from_children(NodeKind::Program, vec![sentence]);

        let expected = "\
└── PROGRAM ('ku ')
    └── SENTENCE ('ku ')
        ├── WORD ('ku')
        │   └── SYLLABLE ('ku')
        └── SPACE (' ')
";
        assert_eq!(program.render_tree(), expected);
    }

    #[test]
    fn test_render_tree_truncates_long_values() {
        let long = "a".repeat(RENDER_VALUE_LIMIT + 5);
        let node = syllable(&long);
        let rendered = node.render_tree();
        assert!(rendered.contains(&format!("{}...", "a".repeat(RENDER_VALUE_LIMIT))));
    }

    #[test]
    fn test_find_all_walks_depth_first() {
        let w1 = SyntaxNode::from_children(NodeKind::Word, vec![syllable("a")]);
        let w2 = SyntaxNode::from_children(NodeKind::Word, vec![syllable("b")]);
        let sentence = SyntaxNode::from_children(NodeKind::Sentence, vec![w1, w2]);
        let words = sentence.find_all(NodeKind::Word);
        assert_eq!(words.iter().map(|w| w.value.as_str()).collect::<Vec<_>>(), ["a", "b"]);
    }
}
