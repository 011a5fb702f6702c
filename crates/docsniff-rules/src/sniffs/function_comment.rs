//! Function and method doc comments

use docsniff_core::{DeclarationKind, Diagnostic, DiagnosticKind, TokenStream};
use regex::Regex;

use super::{preceding_comment, registered_declaration, PrecedingComment, Sniff, SniffError};
use crate::comment::{CommentValidator, DocCommentParser, ValidationProfile};
use crate::config::{ConfigError, FunctionCommentConfig};
use crate::logging;

const REGISTERED: &[DeclarationKind] = &[DeclarationKind::Function];

#[derive(Debug, Clone)]
pub struct FunctionCommentSniff {
    ignored: Vec<String>,
    optional_short_description: Option<Regex>,
}

impl Default for FunctionCommentSniff {
    fn default() -> Self {
        let config = FunctionCommentConfig::default();
        Self {
            optional_short_description: config.optional_short_description_regex().ok().flatten(),
            ignored: config.ignored,
        }
    }
}

impl FunctionCommentSniff {
    pub fn from_config(config: &FunctionCommentConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            ignored: config.ignored.clone(),
            optional_short_description: config.optional_short_description_regex()?,
        })
    }

    fn check(&self, stream: &TokenStream, ptr: usize, name: &str) -> Result<Vec<Diagnostic>, SniffError> {
        let subject = DeclarationKind::Function.keyword();

        let open = match preceding_comment(stream, ptr) {
            PrecedingComment::Doc { open, .. } => open,
            PrecedingComment::Plain(_) => {
                return Ok(vec![Diagnostic::new(DiagnosticKind::WrongCommentStyle, ptr, subject)]);
            }
            PrecedingComment::None => {
                return Ok(vec![Diagnostic::new(DiagnosticKind::MissingComment, ptr, subject)]);
            }
        };

        let comment = DocCommentParser::parse(stream, open)?;
        logging::log_comment_parsed(&comment);

        // Accessors and constructors may document themselves through tags alone
        let short_optional = self
            .optional_short_description
            .as_ref()
            .is_some_and(|regex| regex.is_match(name));

        Ok(CommentValidator::new(ValidationProfile::Function, subject)
            .require_short_description(!short_optional)
            .validate_comment(&comment))
    }
}

impl Sniff for FunctionCommentSniff {
    fn name(&self) -> &'static str {
        "function_comment"
    }

    fn description(&self) -> &'static str {
        "Named functions need a well-formed doc comment"
    }

    fn register(&self) -> &'static [DeclarationKind] {
        REGISTERED
    }

    fn process(&self, stream: &TokenStream, ptr: usize) -> Result<Vec<Diagnostic>, SniffError> {
        registered_declaration(self, stream, ptr)?;

        let Some(name) = stream.declaration_name(ptr) else {
            // Closures are not documented
            return Ok(Vec::new());
        };
        if self.ignored.iter().any(|ignored| ignored == name) {
            return Ok(Vec::new());
        }

        let diagnostics = self.check(stream, ptr, name)?;
        logging::log_sniff_result(self.name(), ptr, diagnostics.len());
        Ok(diagnostics)
    }
}
