//! Structural parser for a single `/** ... */` block
//!
//! Walks the comment's tokens once, left to right, and reconstructs the short
//! description (first line of text after `/**`), the long description (text on
//! later lines) and any text found where no description may appear.

use docsniff_core::{StreamError, Token, TokenKind, TokenStream};
use serde::Serialize;

/// Inclusive range of token indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

/// A reconstructed description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    /// Trimmed text, never empty
    pub text: String,
    /// Line of the first text token
    pub line: usize,
    /// Line of the last text token
    pub end_line: usize,
    /// First and last text token
    pub span: TokenSpan,
}

/// Result of parsing one doc comment. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedComment {
    open_index: usize,
    close_index: usize,
    start_line: usize,
    end_line: usize,
    short: Option<Description>,
    long: Option<Description>,
    junk: Vec<usize>,
    content_after_open: bool,
    first_tag: Option<usize>,
    first_tag_line: Option<usize>,
    last_content_line: Option<usize>,
}

impl ParsedComment {
    /// Index of the `/**` token
    pub fn open_index(&self) -> usize {
        self.open_index
    }

    /// Index of the `*/` token
    pub fn close_index(&self) -> usize {
        self.close_index
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn end_line(&self) -> usize {
        self.end_line
    }

    pub fn short(&self) -> Option<&Description> {
        self.short.as_ref()
    }

    pub fn long(&self) -> Option<&Description> {
        self.long.as_ref()
    }

    /// Short description text, empty when absent
    pub fn short_description(&self) -> &str {
        self.short.as_ref().map_or("", |d| d.text.as_str())
    }

    pub fn short_description_line(&self) -> Option<usize> {
        self.short.as_ref().map(|d| d.line)
    }

    pub fn short_description_span(&self) -> Option<TokenSpan> {
        self.short.as_ref().map(|d| d.span)
    }

    /// Long description text, empty when absent
    pub fn long_description(&self) -> &str {
        self.long.as_ref().map_or("", |d| d.text.as_str())
    }

    pub fn long_description_line(&self) -> Option<usize> {
        self.long.as_ref().map(|d| d.line)
    }

    pub fn long_description_span(&self) -> Option<TokenSpan> {
        self.long.as_ref().map(|d| d.span)
    }

    /// Indices of text tokens found outside any description position
    pub fn junk(&self) -> &[usize] {
        &self.junk
    }

    /// No text and no tags anywhere in the comment
    pub fn is_empty(&self) -> bool {
        self.last_content_line.is_none()
    }

    /// Text or a tag sits on the `/**` line
    pub fn has_content_after_open(&self) -> bool {
        self.content_after_open
    }

    /// Index of the first `@tag` token
    pub fn first_tag(&self) -> Option<usize> {
        self.first_tag
    }

    pub fn first_tag_line(&self) -> Option<usize> {
        self.first_tag_line
    }

    /// Last line holding text or a tag
    pub fn last_content_line(&self) -> Option<usize> {
        self.last_content_line
    }

    /// Last line of the long description, or of the short one without it
    pub fn description_end_line(&self) -> Option<usize> {
        self.long.as_ref().or(self.short.as_ref()).map(|d| d.end_line)
    }
}

/// Where the scan is relative to the descriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeText,
    InShort,
    BetweenShortAndLong,
    InLong,
    Closed,
}

/// Text accumulated for one description
#[derive(Debug, Default)]
struct Accumulator {
    text: String,
    line: usize,
    start: Option<usize>,
    /// Index and line of the last text token
    end: Option<(usize, usize)>,
}

impl Accumulator {
    fn begin(&mut self, index: usize, line: usize) {
        self.start = Some(index);
        self.line = line;
    }

    fn started(&self) -> bool {
        self.start.is_some()
    }

    fn finish(self) -> Option<Description> {
        let start = self.start?;
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Description {
            text: text.to_string(),
            line: self.line,
            end_line: self.end.map_or(self.line, |(_, line)| line),
            span: TokenSpan {
                start,
                end: self.end.map_or(start, |(index, _)| index),
            },
        })
    }
}

/// Running state of the fold over the comment tokens
#[derive(Debug)]
struct Scan {
    state: ScanState,
    line: usize,
    /// Text right after a star on the current line may be description
    in_description: bool,
    last_text: Option<(usize, usize)>,
    short: Accumulator,
    long: Accumulator,
    junk: Vec<usize>,
}

impl Scan {
    fn new(start_line: usize) -> Self {
        Self {
            state: ScanState::BeforeText,
            line: start_line,
            // The opener's own line counts as description
            in_description: true,
            last_text: None,
            short: Accumulator::default(),
            long: Accumulator::default(),
            junk: Vec::new(),
        }
    }

    fn step(&mut self, index: usize, token: &Token) {
        if token.line != self.line {
            self.line = token.line;
            self.in_description = false;
            if self.state == ScanState::InShort {
                // Short description is a single line
                self.short.end = self.last_text;
                self.state = ScanState::BetweenShortAndLong;
            }
        }

        match token.kind {
            TokenKind::DocCommentStar => self.in_description = true,
            TokenKind::DocCommentString => self.text(index, token),
            TokenKind::DocCommentWhitespace if self.in_description => match self.state {
                ScanState::InShort => self.short.text.push_str(&token.text),
                ScanState::InLong => self.long.text.push_str(&token.text),
                _ => {}
            },
            TokenKind::DocCommentTag | TokenKind::DocCommentClose => self.close(),
            _ => {}
        }
    }

    fn text(&mut self, index: usize, token: &Token) {
        if !self.in_description {
            self.junk.push(index);
            return;
        }

        match self.state {
            ScanState::BeforeText => {
                self.short.begin(index, token.line);
                self.state = ScanState::InShort;
                self.short.text.push_str(&token.text);
            }
            ScanState::InShort => self.short.text.push_str(&token.text),
            ScanState::BetweenShortAndLong => {
                self.long.begin(index, token.line);
                self.state = ScanState::InLong;
                self.long.text.push_str(&token.text);
            }
            ScanState::InLong => self.long.text.push_str(&token.text),
            ScanState::Closed => return,
        }
        self.last_text = Some((index, token.line));
    }

    fn close(&mut self) {
        if self.long.started() {
            self.long.end = self.last_text;
        } else if self.short.started() {
            self.short.end = self.last_text;
        }
        self.state = ScanState::Closed;
    }
}

/// Parses doc comment token ranges into `ParsedComment` values
pub struct DocCommentParser;

impl DocCommentParser {
    /// Parse the comment opened at `open`, looking up its closer in the stream.
    ///
    /// Fails only when `open` does not address a `/**` token.
    pub fn parse(stream: &TokenStream, open: usize) -> Result<ParsedComment, StreamError> {
        let token = stream.token(open)?;
        if token.kind != TokenKind::DocCommentOpen {
            return Err(StreamError::NotCommentOpen(open));
        }
        let close = stream
            .comment_closer(open)
            .ok_or(StreamError::UnterminatedComment(open))?;

        Ok(Self::parse_range(stream.tokens(), open, close))
    }

    /// Parse the tokens between `open` and `close` (inclusive).
    ///
    /// Never fails: indices are clamped to the slice and a comment without any
    /// usable text yields empty descriptions.
    pub fn parse_range(tokens: &[Token], open: usize, close: usize) -> ParsedComment {
        let Some(last) = tokens.len().checked_sub(1) else {
            return ParsedComment {
                open_index: open,
                close_index: close,
                start_line: 0,
                end_line: 0,
                short: None,
                long: None,
                junk: Vec::new(),
                content_after_open: false,
                first_tag: None,
                first_tag_line: None,
                last_content_line: None,
            };
        };

        let open = open.min(last);
        let close = close.clamp(open, last);
        let start_line = tokens[open].line;
        let end_line = tokens[close].line.max(start_line);

        let mut scan = Scan::new(start_line);
        for (index, token) in tokens.iter().enumerate().take(close + 1).skip(open + 1) {
            scan.step(index, token);
            if scan.state == ScanState::Closed {
                break;
            }
        }
        if scan.state != ScanState::Closed {
            scan.close();
        }

        let short = scan.short.finish();
        // A long description only exists behind a short one
        let long = short.as_ref().and(scan.long.finish());

        let mut content_after_open = false;
        let mut first_tag = None;
        let mut last_content_line = None;
        for (index, token) in tokens.iter().enumerate().take(close).skip(open + 1) {
            if !matches!(token.kind, TokenKind::DocCommentString | TokenKind::DocCommentTag) {
                continue;
            }
            content_after_open |= token.line == start_line;
            last_content_line = Some(token.line);
            if token.kind == TokenKind::DocCommentTag && first_tag.is_none() {
                first_tag = Some((index, token.line));
            }
        }

        ParsedComment {
            open_index: open,
            close_index: close,
            start_line,
            end_line,
            short,
            long,
            junk: scan.junk,
            content_after_open,
            first_tag: first_tag.map(|(index, _)| index),
            first_tag_line: first_tag.map(|(_, line)| line),
            last_content_line,
        }
    }
}
