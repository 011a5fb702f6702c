//! Diagnostic types produced by doc comment checks

use serde::Serialize;

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    /// No text or tags at all between `/**` and `*/`
    EmptyComment,
    /// Text or a tag on the same line as `/**`
    ContentAfterOpen,
    /// Text where no description may appear, e.g. a line without `*`
    TextOutsideDescription,
    MissingShortDescription,
    /// The short description is not on the line after `/**`
    WrongShortDescriptionLine,
    ShortDescriptionNotCapitalized,
    ShortDescriptionNoPunctuation,
    /// Short and long description are not separated by exactly one blank line
    WrongLongDescriptionSpacing,
    LongDescriptionNoPunctuation,
    LongDescriptionNotCapitalized,
    /// The inherit-doc marker is written in a letter case other than lowercase
    InheritdocMisspelled,
    /// The descriptions and the first tag are not separated by exactly one blank line
    WrongBlankLinesBeforeTags,
    /// Blank lines between the last content and `*/`, or `*/` on a content line
    BlankLinesAtEndOfComment,
    MissingComment,
    /// A plain comment where a doc comment is required
    WrongCommentStyle,
    BlankLineAfterComment,
    WrongBlankLinesBeforeComment,
}

impl DiagnosticKind {
    /// Stable identifier (e.g. "docComment.shortDescriptionCapital")
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::EmptyComment => "docComment.empty",
            DiagnosticKind::ContentAfterOpen => "docComment.contentAfterOpen",
            DiagnosticKind::TextOutsideDescription => "docComment.missingAsterisk",
            DiagnosticKind::MissingShortDescription => "docComment.shortDescription",
            DiagnosticKind::WrongShortDescriptionLine => "docComment.shortDescriptionLine",
            DiagnosticKind::ShortDescriptionNotCapitalized => "docComment.shortDescriptionCapital",
            DiagnosticKind::ShortDescriptionNoPunctuation => "docComment.shortDescriptionPunctuation",
            DiagnosticKind::WrongLongDescriptionSpacing => "docComment.longDescriptionLocation",
            DiagnosticKind::LongDescriptionNoPunctuation => "docComment.longDescriptionPunctuation",
            DiagnosticKind::LongDescriptionNotCapitalized => "docComment.longDescriptionCapital",
            DiagnosticKind::InheritdocMisspelled => "docComment.inheritdocCase",
            DiagnosticKind::WrongBlankLinesBeforeTags => "docComment.spacingBeforeTags",
            DiagnosticKind::BlankLinesAtEndOfComment => "docComment.spacingAtEnd",
            DiagnosticKind::MissingComment => "docComment.missing",
            DiagnosticKind::WrongCommentStyle => "docComment.wrongStyle",
            DiagnosticKind::BlankLineAfterComment => "docComment.spacingAfter",
            DiagnosticKind::WrongBlankLinesBeforeComment => "docComment.spacingBefore",
        }
    }

    /// Human-readable message; `subject` names the declaration ("class", "function", ...)
    pub fn message(&self, subject: &str) -> String {
        match self {
            DiagnosticKind::EmptyComment => format!("The {} doc comment is empty", subject),
            DiagnosticKind::ContentAfterOpen => {
                "The open comment tag must be the only content on the line".to_string()
            }
            DiagnosticKind::TextOutsideDescription => "Text must be after asterisks".to_string(),
            DiagnosticKind::MissingShortDescription => {
                format!("Missing short description in {} comment", subject)
            }
            DiagnosticKind::WrongShortDescriptionLine => {
                format!("Short description in {} comment should be in second line", subject)
            }
            DiagnosticKind::ShortDescriptionNotCapitalized => {
                "Short description must start with capital letter".to_string()
            }
            DiagnosticKind::ShortDescriptionNoPunctuation => {
                "Short description must end with punctuation".to_string()
            }
            DiagnosticKind::WrongLongDescriptionSpacing => {
                "Long description must be separated by 1 blank line from short description".to_string()
            }
            DiagnosticKind::LongDescriptionNoPunctuation => {
                "Long description must end with punctuation".to_string()
            }
            DiagnosticKind::LongDescriptionNotCapitalized => {
                "Long description must start with capital letter".to_string()
            }
            DiagnosticKind::InheritdocMisspelled => {
                "{@inheritdoc} must be spelled lowercase".to_string()
            }
            DiagnosticKind::WrongBlankLinesBeforeTags => {
                format!("There must be exactly one blank line before the tags in {} comment", subject)
            }
            DiagnosticKind::BlankLinesAtEndOfComment => {
                format!("Additional blank lines found at end of {} comment", subject)
            }
            DiagnosticKind::MissingComment => format!("Missing {} doc comment", subject),
            DiagnosticKind::WrongCommentStyle => {
                format!("You must use \"/**\" style comments for a {} comment", subject)
            }
            DiagnosticKind::BlankLineAfterComment => {
                format!("There must be no blank lines after the {} comment", subject)
            }
            DiagnosticKind::WrongBlankLinesBeforeComment => {
                format!("There must be exactly one blank line before the {} comment", subject)
            }
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A style violation attached to a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Token the host reports the violation at
    pub anchor_token: usize,
    /// Whether `replacement` is available
    pub fixable: bool,
    /// Suggested text for the anchor token's description
    pub replacement: Option<String>,
    pub message: String,
}

impl Diagnostic {
    /// Create a non-fixable diagnostic
    pub fn new(kind: DiagnosticKind, anchor_token: usize, subject: &str) -> Self {
        Self {
            kind,
            anchor_token,
            fixable: false,
            replacement: None,
            message: kind.message(subject),
        }
    }

    /// Create a diagnostic carrying a replacement text
    pub fn fixable(
        kind: DiagnosticKind,
        anchor_token: usize,
        subject: &str,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            anchor_token,
            fixable: true,
            replacement: Some(replacement.into()),
            message: kind.message(subject),
        }
    }
}
