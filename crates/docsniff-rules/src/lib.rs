//! docsniff-rules: doc comment checks for PHP declarations
//!
//! This crate provides the checks that run on top of a host-supplied token
//! stream:
//!
//! - `comment::parser`: reconstructs short/long descriptions and stray text
//!   from the tokens of one `/** ... */` block
//! - `comment::validator`: ordered description and placement checks
//! - `sniffs`: class/interface/trait and function comment sniffs
//! - `config`: TOML-backed sniff options
//! - `logging`: optional file logger for debugging runs
//!
//! # Example
//!
//! ```ignore
//! use docsniff_rules::config::SniffConfig;
//! use docsniff_rules::sniffs::{ClassCommentSniff, Sniff};
//!
//! let config = SniffConfig::from_toml_str(toml_text)?;
//! let sniff = ClassCommentSniff::from_config(&config.class_comment)?;
//! let diagnostics = sniff.process(&stream, class_token)?;
//! ```

pub mod comment;
pub mod config;
pub mod logging;
pub mod sniffs;

#[cfg(test)]
pub(crate) mod test_support;

pub use comment::{
    CommentPlacement, CommentValidator, Description, DocCommentParser, ParsedComment, TokenSpan,
    ValidationProfile,
};
pub use config::{BlankLineMeasure, ConfigError, SniffConfig};
pub use sniffs::{ClassCommentSniff, FunctionCommentSniff, Sniff, SniffError};
