//! Ordered token storage with doc comment links and navigation helpers

use std::collections::HashMap;

use crate::error::StreamError;
use crate::token::{Token, TokenKind};

/// A read-only, position-ordered token list for one source file.
///
/// Every `DocCommentOpen` is linked to its `DocCommentClose` (and back) when
/// the stream is built, so checks never have to rescan for the closer.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    closers: HashMap<usize, usize>,
    openers: HashMap<usize, usize>,
}

impl TokenStream {
    /// Build a stream, validating ordering and linking doc comments
    pub fn new(tokens: Vec<Token>) -> Result<Self, StreamError> {
        let mut closers = HashMap::new();
        let mut openers = HashMap::new();
        let mut pending_open: Option<usize> = None;
        let mut previous_line = 0;

        for (index, token) in tokens.iter().enumerate() {
            if token.line < previous_line {
                return Err(StreamError::OutOfOrder {
                    index,
                    line: token.line,
                    previous: previous_line,
                });
            }
            previous_line = token.line;

            match token.kind {
                TokenKind::DocCommentOpen => {
                    if let Some(open) = pending_open {
                        return Err(StreamError::UnterminatedComment(open));
                    }
                    pending_open = Some(index);
                }
                TokenKind::DocCommentClose => {
                    if let Some(open) = pending_open.take() {
                        closers.insert(open, index);
                        openers.insert(index, open);
                    }
                }
                _ => {}
            }
        }

        if let Some(open) = pending_open {
            return Err(StreamError::UnterminatedComment(open));
        }

        Ok(Self {
            tokens,
            closers,
            openers,
        })
    }

    /// Start building a stream from token texts
    pub fn builder() -> StreamBuilder {
        StreamBuilder::new()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Get a token, failing with `IndexOutOfBounds` for a bad index
    pub fn token(&self, index: usize) -> Result<&Token, StreamError> {
        self.tokens.get(index).ok_or(StreamError::IndexOutOfBounds {
            index,
            len: self.tokens.len(),
        })
    }

    /// Index of the `*/` closing the doc comment opened at `open`
    pub fn comment_closer(&self, open: usize) -> Option<usize> {
        self.closers.get(&open).copied()
    }

    /// Index of the `/**` opening the doc comment closed at `close`
    pub fn comment_opener(&self, close: usize) -> Option<usize> {
        self.openers.get(&close).copied()
    }

    /// Search backwards from `before` (exclusive) for a matching token
    pub fn find_previous<F>(&self, before: usize, predicate: F) -> Option<usize>
    where
        F: Fn(&Token) -> bool,
    {
        let end = before.min(self.tokens.len());
        self.tokens[..end].iter().rposition(predicate)
    }

    /// Name following the declaration keyword at `ptr`.
    ///
    /// Returns `None` for closures and for tokens that are not declarations.
    pub fn declaration_name(&self, ptr: usize) -> Option<&str> {
        let keyword = self.tokens.get(ptr)?;
        if !matches!(keyword.kind, TokenKind::Declaration(_)) {
            return None;
        }

        for token in &self.tokens[ptr + 1..] {
            match token.kind {
                TokenKind::Identifier => return Some(token.text.as_str()),
                TokenKind::Whitespace | TokenKind::Comment => continue,
                // `function &name()` returns by reference
                TokenKind::Other if token.text == "&" => continue,
                _ => return None,
            }
        }

        None
    }
}

/// Builds a `TokenStream` from kinds and texts, computing positions
#[derive(Debug)]
pub struct StreamBuilder {
    tokens: Vec<Token>,
    line: usize,
    column: usize,
}

impl Default for StreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamBuilder {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            line: 1,
            column: 1,
        }
    }

    /// Append a token starting at the current position
    pub fn push(&mut self, kind: TokenKind, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        let token = Token::new(kind, text, self.line, self.column);

        for ch in token.text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.tokens.push(token);
        self
    }

    /// Index the next pushed token will get
    pub fn next_index(&self) -> usize {
        self.tokens.len()
    }

    pub fn build(&mut self) -> Result<TokenStream, StreamError> {
        TokenStream::new(std::mem::take(&mut self.tokens))
    }
}
