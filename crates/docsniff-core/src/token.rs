//! Token model shared between the host tokenizer and the checks

use serde::Serialize;

/// Kind of declaration a doc comment can document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Class,
    Interface,
    Trait,
    Function,
}

impl DeclarationKind {
    /// The PHP keyword introducing this declaration
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Trait => "trait",
            DeclarationKind::Function => "function",
        }
    }

    /// Map a keyword (any letter case) to a declaration kind
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "class" => Some(DeclarationKind::Class),
            "interface" => Some(DeclarationKind::Interface),
            "trait" => Some(DeclarationKind::Trait),
            "function" => Some(DeclarationKind::Function),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Token kinds understood by the checks.
///
/// The doc comment sub-kinds mirror what a PHP tokenizer produces inside
/// `/** ... */`. Everything the checks never look at collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// `<?php`
    OpenTag,
    /// Whitespace outside of comments
    Whitespace,
    /// Non-doc comment: `//`, `#` or `/* */`
    Comment,
    /// `/**`
    DocCommentOpen,
    /// Leading `*` of a doc comment line
    DocCommentStar,
    /// Text inside a doc comment
    DocCommentString,
    /// Whitespace inside a doc comment, newlines included
    DocCommentWhitespace,
    /// `@tag` inside a doc comment
    DocCommentTag,
    /// `*/`
    DocCommentClose,
    /// `abstract`, `final`, visibility and `static`
    Modifier,
    /// `class`, `interface`, `trait` or `function`
    Declaration(DeclarationKind),
    /// Names
    Identifier,
    Other,
}

/// A single token as produced by the host tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text
    pub text: String,
    /// 1-based line where the token starts
    pub line: usize,
    /// 1-based column where the token starts
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Line on which the token ends
    pub fn end_line(&self) -> usize {
        self.line + self.text.matches('\n').count()
    }
}
