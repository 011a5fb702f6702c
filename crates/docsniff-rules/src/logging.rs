//! Logging module for docsniff-rules
//!
//! Provides detailed logging of parsed comments and sniff results for
//! debugging rule behaviour. Nothing is written until `init_logger` is called.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::comment::ParsedComment;
use crate::config::SniffConfig;

/// Global logger instance
static LOGGER: Mutex<Option<SniffLogger>> = Mutex::new(None);

/// Logger for sniff runs
pub struct SniffLogger {
    file: File,
}

impl SniffLogger {
    /// Create a new logger writing to the specified path
    pub fn new(log_path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;

        Ok(Self { file })
    }

    /// Write a log message
    pub fn log(&mut self, message: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(self.file, "[{}] {}", timestamp, message);
        let _ = self.file.flush();
    }

    /// Log a section header
    pub fn section(&mut self, title: &str) {
        let separator = "=".repeat(60);
        self.log(&separator);
        self.log(title);
        self.log(&separator);
    }
}

/// Initialize the global logger
pub fn init_logger(log_path: Option<&Path>) -> std::io::Result<PathBuf> {
    let path = log_path.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        std::env::temp_dir().join(format!("docsniff-{}.log", timestamp))
    });

    let logger = SniffLogger::new(&path)?;

    if let Ok(mut guard) = LOGGER.lock() {
        *guard = Some(logger);
    }

    Ok(path)
}

/// Stop logging and close the log file
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER.lock() {
        *guard = None;
    }
}

/// Log a message to the global logger
pub fn log(message: &str) {
    if let Ok(mut guard) = LOGGER.lock() {
        if let Some(ref mut logger) = *guard {
            logger.log(message);
        }
    }
}

/// Log a section header
pub fn section(title: &str) {
    if let Ok(mut guard) = LOGGER.lock() {
        if let Some(ref mut logger) = *guard {
            logger.section(title);
        }
    }
}

/// Check if logging is enabled
pub fn is_enabled() -> bool {
    if let Ok(guard) = LOGGER.lock() {
        guard.is_some()
    } else {
        false
    }
}

/// Log loaded sniff options
pub fn log_config_loaded(config: &SniffConfig) {
    if !is_enabled() {
        return;
    }
    section("SNIFF CONFIGURATION");
    log(&format!(
        "class_comment: exempt_pattern = {:?}, blank_lines_measure = {:?}",
        config.class_comment.exempt_pattern, config.class_comment.blank_lines_measure
    ));
    log(&format!(
        "function_comment: ignored = {:?}, optional_short_description = {:?}",
        config.function_comment.ignored, config.function_comment.optional_short_description
    ));
}

/// Log the structure found in one doc comment
pub fn log_comment_parsed(comment: &ParsedComment) {
    if !is_enabled() {
        return;
    }
    log(&format!(
        "Parsed comment at tokens {}..{} (lines {}-{}): short = {:?}, long = {:?}, junk = {:?}",
        comment.open_index(),
        comment.close_index(),
        comment.start_line(),
        comment.end_line(),
        comment.short_description(),
        comment.long_description(),
        comment.junk()
    ));
}

/// Log how many diagnostics a sniff reported for a declaration
pub fn log_sniff_result(sniff: &str, ptr: usize, diagnostics: usize) {
    log(&format!("[{}] token {}: {} diagnostic(s)", sniff, ptr, diagnostics));
}
