//! Ordered description and placement checks for a parsed doc comment

use docsniff_core::{Diagnostic, DiagnosticKind};

use super::parser::{Description, ParsedComment};

/// Marker that lets a function comment inherit its parent's documentation
pub const INHERITDOC: &str = "{@inheritdoc}";

const PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Which declaration family a comment documents.
///
/// Function comments accept the inherit-doc marker in place of a capitalized
/// or punctuated description; class comments do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationProfile {
    #[default]
    Class,
    Function,
}

impl ValidationProfile {
    fn accepts_inheritdoc(&self) -> bool {
        matches!(self, ValidationProfile::Function)
    }
}

/// Structural facts about where a comment sits, measured by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentPlacement {
    /// Blank lines between the previous code and `/**`; `None` when there is
    /// nothing to measure from
    pub blank_lines_before: Option<usize>,
    /// Blank lines between `*/` and the declaration keyword; negative when
    /// the keyword shares the closer's line
    pub blank_lines_after: isize,
}

/// Applies the comment checks and collects diagnostics
#[derive(Debug, Clone)]
pub struct CommentValidator {
    profile: ValidationProfile,
    subject: String,
    require_short_description: bool,
}

impl CommentValidator {
    /// `subject` names the declaration in messages ("class", "function", ...)
    pub fn new(profile: ValidationProfile, subject: impl Into<String>) -> Self {
        Self {
            profile,
            subject: subject.into(),
            require_short_description: true,
        }
    }

    /// Whether a missing short description is reported.
    ///
    /// Validation still stops at a missing short description either way.
    pub fn require_short_description(mut self, required: bool) -> Self {
        self.require_short_description = required;
        self
    }

    pub fn profile(&self) -> ValidationProfile {
        self.profile
    }

    /// Every check on the comment itself, in reporting order.
    ///
    /// An empty comment gets `EmptyComment` and nothing else. Otherwise the
    /// opener line is checked, then the descriptions (`validate`), then the
    /// spacing before the tags and at the end of the comment. The last two
    /// need a short description to measure from.
    pub fn validate_comment(&self, comment: &ParsedComment) -> Vec<Diagnostic> {
        if comment.is_empty() {
            return vec![Diagnostic::new(
                DiagnosticKind::EmptyComment,
                comment.open_index(),
                &self.subject,
            )];
        }

        let mut diagnostics = Vec::new();
        if comment.has_content_after_open() {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::ContentAfterOpen,
                comment.open_index(),
                &self.subject,
            ));
        }

        diagnostics.extend(self.validate(comment));
        if comment.short().is_none() {
            return diagnostics;
        }

        diagnostics.extend(self.check_tag_spacing(comment));
        diagnostics.extend(self.check_trailing_blank_lines(comment));
        diagnostics
    }

    /// Blank line checks around the comment
    pub fn validate_placement(
        &self,
        comment: &ParsedComment,
        placement: &CommentPlacement,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if placement.blank_lines_after != 0 {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::BlankLineAfterComment,
                comment.close_index(),
                &self.subject,
            ));
        }

        if let Some(before) = placement.blank_lines_before {
            if before != 1 {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::WrongBlankLinesBeforeComment,
                    comment.open_index(),
                    &self.subject,
                ));
            }
        }

        diagnostics
    }

    /// Description checks, in order; stops early without a short or long description
    pub fn validate(&self, comment: &ParsedComment) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = comment
            .junk()
            .iter()
            .map(|&ptr| Diagnostic::new(DiagnosticKind::TextOutsideDescription, ptr, &self.subject))
            .collect();

        if self.profile.accepts_inheritdoc() {
            diagnostics.extend(self.check_inheritdoc_case(comment));
        }

        let Some(short) = comment.short() else {
            if self.require_short_description {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::MissingShortDescription,
                    comment.open_index(),
                    &self.subject,
                ));
            }
            return diagnostics;
        };

        if short.line != comment.start_line() + 1 {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::WrongShortDescriptionLine,
                short.span.start,
                &self.subject,
            ));
        }

        diagnostics.extend(self.check_capitalization(
            DiagnosticKind::ShortDescriptionNotCapitalized,
            short,
        ));
        diagnostics.extend(self.check_punctuation(DiagnosticKind::ShortDescriptionNoPunctuation, short));

        let Some(long) = comment.long() else {
            return diagnostics;
        };

        if long.line != short.line + 2 {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::WrongLongDescriptionSpacing,
                long.span.start,
                &self.subject,
            ));
        }

        diagnostics.extend(self.check_punctuation(DiagnosticKind::LongDescriptionNoPunctuation, long));
        diagnostics.extend(self.check_capitalization(
            DiagnosticKind::LongDescriptionNotCapitalized,
            long,
        ));

        diagnostics
    }

    /// Report a description whose first character is not upper case
    pub fn check_capitalization(
        &self,
        kind: DiagnosticKind,
        description: &Description,
    ) -> Option<Diagnostic> {
        let text = &description.text;
        if self.profile.accepts_inheritdoc() && text.starts_with(INHERITDOC) {
            return None;
        }

        let capitalized = capitalize_first(text);
        if capitalized == *text {
            return None;
        }

        Some(Diagnostic::fixable(
            kind,
            description.span.start,
            &self.subject,
            capitalized,
        ))
    }

    /// Report a description not ending in `.`, `!` or `?`
    pub fn check_punctuation(
        &self,
        kind: DiagnosticKind,
        description: &Description,
    ) -> Option<Diagnostic> {
        let text = &description.text;
        if text.ends_with(PUNCTUATION) {
            return None;
        }
        if self.profile.accepts_inheritdoc()
            && kind == DiagnosticKind::ShortDescriptionNoPunctuation
            && text.ends_with(INHERITDOC)
        {
            return None;
        }

        Some(Diagnostic::fixable(
            kind,
            description.span.end,
            &self.subject,
            format!("{}.", text),
        ))
    }

    fn check_tag_spacing(&self, comment: &ParsedComment) -> Option<Diagnostic> {
        let tag = comment.first_tag()?;
        let tag_line = comment.first_tag_line()?;
        let description_end = comment.description_end_line()?;
        if tag_line == description_end + 2 {
            return None;
        }

        Some(Diagnostic::new(
            DiagnosticKind::WrongBlankLinesBeforeTags,
            tag,
            &self.subject,
        ))
    }

    /// `*/` belongs on the line right after the last content
    fn check_trailing_blank_lines(&self, comment: &ParsedComment) -> Option<Diagnostic> {
        let last = comment.last_content_line()?;
        if comment.end_line() == last + 1 {
            return None;
        }

        Some(Diagnostic::new(
            DiagnosticKind::BlankLinesAtEndOfComment,
            comment.close_index(),
            &self.subject,
        ))
    }

    fn check_inheritdoc_case(&self, comment: &ParsedComment) -> Option<Diagnostic> {
        let combined = format!("{} {}", comment.short_description(), comment.long_description());
        // ASCII lowercasing keeps byte offsets aligned with `combined`
        let position = combined.to_ascii_lowercase().find(INHERITDOC)?;
        if &combined[position..position + INHERITDOC.len()] == INHERITDOC {
            return None;
        }

        let anchor = comment
            .short_description_span()
            .map_or(comment.open_index(), |span| span.start);
        Some(Diagnostic::new(
            DiagnosticKind::InheritdocMisspelled,
            anchor,
            &self.subject,
        ))
    }
}

/// Upper-case the first character, leaving the rest untouched
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
