//! Errors raised while building or indexing a token stream

use thiserror::Error;

/// Errors that can occur when a token stream is built or addressed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("Token index {index} out of bounds for stream of {len} tokens")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Token {index} starts on line {line}, before line {previous} of the preceding token")]
    OutOfOrder {
        index: usize,
        line: usize,
        previous: usize,
    },

    #[error("Doc comment opened at token {0} is never closed")]
    UnterminatedComment(usize),

    #[error("Token {0} is not a doc comment opener")]
    NotCommentOpen(usize),
}
