//! docsniff-core: Core abstractions for doc comment checks
//!
//! This crate provides:
//! - `Token` / `TokenKind`: the host tokenizer's output, reduced to the kinds
//!   the checks care about
//! - `TokenStream`: an ordered token list with doc comment opener/closer links
//! - `StreamBuilder`: builds a stream while tracking lines and columns
//! - `Diagnostic`: a style violation anchored at a token, optionally fixable

mod diagnostic;
mod error;
mod stream;
mod token;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::StreamError;
pub use stream::{StreamBuilder, TokenStream};
pub use token::{DeclarationKind, Token, TokenKind};
