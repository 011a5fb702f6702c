//! Comment sniffs for PHP declarations
//!
//! A sniff is handed the token stream and the index of a declaration keyword
//! it registered for, and returns the diagnostics for that declaration's doc
//! comment.

mod class_comment;
mod function_comment;

pub use class_comment::ClassCommentSniff;
pub use function_comment::FunctionCommentSniff;

use docsniff_core::{DeclarationKind, Diagnostic, StreamError, TokenKind, TokenStream};
use thiserror::Error;

/// Errors that can occur when a sniff is pointed at the wrong token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SniffError {
    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error("Token {ptr} is not a declaration handled by {sniff}")]
    NotRegistered { sniff: &'static str, ptr: usize },
}

/// A check run on one declaration
pub trait Sniff: Send + Sync {
    /// Internal name for this sniff
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Declaration kinds this sniff wants to be called for
    fn register(&self) -> &'static [DeclarationKind];

    /// Check the declaration at `ptr`
    fn process(&self, stream: &TokenStream, ptr: usize) -> Result<Vec<Diagnostic>, SniffError>;
}

/// The comment found in front of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrecedingComment {
    Doc { open: usize, close: usize },
    Plain(usize),
    None,
}

/// Look back from `ptr` over whitespace and modifiers for a comment
pub(crate) fn preceding_comment(stream: &TokenStream, ptr: usize) -> PrecedingComment {
    let Some(prev) = stream.find_previous(ptr, |t| {
        !matches!(t.kind, TokenKind::Whitespace | TokenKind::Modifier)
    }) else {
        return PrecedingComment::None;
    };

    match stream.get(prev).map(|t| t.kind) {
        Some(TokenKind::DocCommentClose) => match stream.comment_opener(prev) {
            Some(open) => PrecedingComment::Doc { open, close: prev },
            None => PrecedingComment::None,
        },
        Some(TokenKind::Comment) => PrecedingComment::Plain(prev),
        _ => PrecedingComment::None,
    }
}

/// Resolve the declaration token at `ptr`, checking the sniff registered for it
pub(crate) fn registered_declaration(
    sniff: &dyn Sniff,
    stream: &TokenStream,
    ptr: usize,
) -> Result<DeclarationKind, SniffError> {
    match stream.token(ptr)?.kind {
        TokenKind::Declaration(kind) if sniff.register().contains(&kind) => Ok(kind),
        _ => Err(SniffError::NotRegistered {
            sniff: sniff.name(),
            ptr,
        }),
    }
}
