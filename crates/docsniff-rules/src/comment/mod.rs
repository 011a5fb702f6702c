//! Doc comment structure and description checks

mod parser;
mod validator;

pub use parser::{Description, DocCommentParser, ParsedComment, TokenSpan};
pub use validator::{CommentPlacement, CommentValidator, ValidationProfile, INHERITDOC};
