//! Sniff options
//!
//! Options are read from TOML text such as:
//!
//! ```toml
//! [class_comment]
//! exempt_pattern = "Test$"
//! blank_lines_measure = "previous_statement"
//!
//! [function_comment]
//! ignored = ["__toString"]
//! ```

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading sniff options
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse sniff config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid pattern for {option}: {source}")]
    InvalidPattern {
        option: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Configuration for all comment sniffs
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SniffConfig {
    pub class_comment: ClassCommentConfig,
    pub function_comment: FunctionCommentConfig,
}

impl SniffConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SniffConfig = toml::from_str(text)?;
        crate::logging::log_config_loaded(&config);
        Ok(config)
    }
}

/// Where the blank lines before a class comment are counted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankLineMeasure {
    /// The closest non-whitespace token before `/**`
    #[default]
    PreviousToken,
    /// The closest `;` before `/**`; not measured when there is none
    PreviousStatement,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassCommentConfig {
    /// Declarations whose name matches may omit their comment
    pub exempt_pattern: Option<String>,
    pub blank_lines_measure: BlankLineMeasure,
}

impl Default for ClassCommentConfig {
    fn default() -> Self {
        Self {
            exempt_pattern: Some("Test$".to_string()),
            blank_lines_measure: BlankLineMeasure::default(),
        }
    }
}

impl ClassCommentConfig {
    pub fn exempt_regex(&self) -> Result<Option<Regex>, ConfigError> {
        compile("class_comment.exempt_pattern", self.exempt_pattern.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FunctionCommentConfig {
    /// Function names that are never checked
    pub ignored: Vec<String>,
    /// Function names that may leave out the short description
    pub optional_short_description: Option<String>,
}

impl Default for FunctionCommentConfig {
    fn default() -> Self {
        Self {
            ignored: vec!["__toString".to_string()],
            optional_short_description: Some(r"^(set|get|has|add|is)[A-Z]|__construct".to_string()),
        }
    }
}

impl FunctionCommentConfig {
    pub fn optional_short_description_regex(&self) -> Result<Option<Regex>, ConfigError> {
        compile(
            "function_comment.optional_short_description",
            self.optional_short_description.as_deref(),
        )
    }
}

fn compile(option: &'static str, pattern: Option<&str>) -> Result<Option<Regex>, ConfigError> {
    pattern
        .map(|p| Regex::new(p).map_err(|source| ConfigError::InvalidPattern { option, source }))
        .transpose()
}
