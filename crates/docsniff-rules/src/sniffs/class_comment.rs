//! Class, interface and trait doc comments
//!
//! Verifies that:
//! - a doc comment exists, unless the name is exempt (test classes)
//! - it is a `/** */` comment rather than a plain one
//! - there is exactly one blank line before it and none after it
//! - its descriptions pass the description checks

use docsniff_core::{DeclarationKind, Diagnostic, DiagnosticKind, TokenKind, TokenStream};
use regex::Regex;

use super::{preceding_comment, registered_declaration, PrecedingComment, Sniff, SniffError};
use crate::comment::{CommentPlacement, CommentValidator, DocCommentParser, ValidationProfile};
use crate::config::{BlankLineMeasure, ClassCommentConfig, ConfigError};
use crate::logging;

const REGISTERED: &[DeclarationKind] = &[
    DeclarationKind::Class,
    DeclarationKind::Interface,
    DeclarationKind::Trait,
];

#[derive(Debug, Clone)]
pub struct ClassCommentSniff {
    exempt: Option<Regex>,
    measure: BlankLineMeasure,
}

impl Default for ClassCommentSniff {
    fn default() -> Self {
        Self {
            exempt: Regex::new("Test$").ok(),
            measure: BlankLineMeasure::default(),
        }
    }
}

impl ClassCommentSniff {
    pub fn from_config(config: &ClassCommentConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            exempt: config.exempt_regex()?,
            measure: config.blank_lines_measure,
        })
    }

    fn is_exempt(&self, stream: &TokenStream, ptr: usize) -> bool {
        match (&self.exempt, stream.declaration_name(ptr)) {
            (Some(exempt), Some(name)) => exempt.is_match(name),
            _ => false,
        }
    }

    /// A comment right after the file's first `<?php` documents the file
    fn is_file_comment(stream: &TokenStream, comment_start: usize) -> bool {
        let Some(prev) = stream.find_previous(comment_start, |t| t.kind != TokenKind::Whitespace)
        else {
            return false;
        };

        stream.get(prev).map(|t| t.kind) == Some(TokenKind::OpenTag)
            && stream
                .find_previous(prev, |t| t.kind == TokenKind::OpenTag)
                .is_none()
    }

    /// Consecutive plain comments count as one block
    fn first_of_comment_run(stream: &TokenStream, last: usize) -> usize {
        let mut first = last;
        while let Some(prev) = stream.find_previous(first, |t| t.kind != TokenKind::Whitespace) {
            if stream.get(prev).map(|t| t.kind) != Some(TokenKind::Comment) {
                break;
            }
            first = prev;
        }
        first
    }

    fn blank_lines_before(&self, stream: &TokenStream, open: usize) -> Option<usize> {
        let prev = match self.measure {
            BlankLineMeasure::PreviousToken => {
                stream.find_previous(open, |t| t.kind != TokenKind::Whitespace)?
            }
            BlankLineMeasure::PreviousStatement => {
                stream.find_previous(open, |t| t.kind == TokenKind::Other && t.text == ";")?
            }
        };

        let open_line = stream.get(open)?.line;
        let prev_line = stream.get(prev)?.end_line();
        Some(open_line.saturating_sub(prev_line).saturating_sub(1))
    }

    fn check(
        &self,
        stream: &TokenStream,
        ptr: usize,
        subject: &str,
    ) -> Result<Vec<Diagnostic>, SniffError> {
        let exempt = self.is_exempt(stream, ptr);
        let missing = || {
            if exempt {
                Vec::new()
            } else {
                vec![Diagnostic::new(DiagnosticKind::MissingComment, ptr, subject)]
            }
        };

        let found = preceding_comment(stream, ptr);
        let comment_start = match found {
            PrecedingComment::None => return Ok(missing()),
            PrecedingComment::Doc { open, .. } => open,
            PrecedingComment::Plain(last) => Self::first_of_comment_run(stream, last),
        };

        if Self::is_file_comment(stream, comment_start) {
            return Ok(missing());
        }

        let PrecedingComment::Doc { open, close } = found else {
            return Ok(vec![Diagnostic::new(
                DiagnosticKind::WrongCommentStyle,
                ptr,
                subject,
            )]);
        };

        let comment = DocCommentParser::parse(stream, open)?;
        logging::log_comment_parsed(&comment);

        let keyword_line = stream.token(ptr)?.line as isize;
        let close_line = stream.token(close)?.end_line() as isize;
        let placement = CommentPlacement {
            blank_lines_before: self.blank_lines_before(stream, open),
            blank_lines_after: keyword_line - close_line - 1,
        };

        let validator = CommentValidator::new(ValidationProfile::Class, subject);
        let mut diagnostics = validator.validate_placement(&comment, &placement);
        diagnostics.extend(validator.validate_comment(&comment));
        Ok(diagnostics)
    }
}

impl Sniff for ClassCommentSniff {
    fn name(&self) -> &'static str {
        "class_comment"
    }

    fn description(&self) -> &'static str {
        "Classes, interfaces and traits need a well-formed doc comment"
    }

    fn register(&self) -> &'static [DeclarationKind] {
        REGISTERED
    }

    fn process(&self, stream: &TokenStream, ptr: usize) -> Result<Vec<Diagnostic>, SniffError> {
        let kind = registered_declaration(self, stream, ptr)?;
        let diagnostics = self.check(stream, ptr, kind.keyword())?;
        logging::log_sniff_result(self.name(), ptr, diagnostics.len());
        Ok(diagnostics)
    }
}
