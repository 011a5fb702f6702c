//! Minimal PHP lexer for test fixtures.
//!
//! Produces the token kinds a PHP tokenizer emits around declarations and
//! inside doc comments. Only what the fixtures use is recognized.

use docsniff_core::{DeclarationKind, StreamBuilder, TokenKind, TokenStream};

pub(crate) fn tokenize(source: &str) -> TokenStream {
    let mut builder = TokenStream::builder();
    let mut rest = source;

    while !rest.is_empty() {
        let consumed = if rest.starts_with("<?php") {
            builder.push(TokenKind::OpenTag, "<?php");
            5
        } else if rest.starts_with(char::is_whitespace) {
            let len = whitespace_len(rest);
            builder.push(TokenKind::Whitespace, &rest[..len]);
            len
        } else if rest.starts_with("/**") && !rest.starts_with("/**/") {
            lex_doc_comment(&mut builder, rest)
        } else if rest.starts_with("//") || rest.starts_with('#') {
            let len = rest.find('\n').unwrap_or(rest.len());
            builder.push(TokenKind::Comment, &rest[..len]);
            len
        } else if rest.starts_with("/*") {
            let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
            builder.push(TokenKind::Comment, &rest[..len]);
            len
        } else if rest.starts_with(is_word_char) {
            let len: usize = rest
                .chars()
                .take_while(|c| is_word_char(*c))
                .map(char::len_utf8)
                .sum();
            let word = &rest[..len];
            builder.push(word_kind(word), word);
            len
        } else {
            let len = rest.chars().next().map_or(1, char::len_utf8);
            builder.push(TokenKind::Other, &rest[..len]);
            len
        };
        rest = &rest[consumed..];
    }

    builder.build().expect("fixture source must be well formed")
}

/// Index of the first `/**` token in the stream
pub(crate) fn doc_comment_opener(stream: &TokenStream) -> usize {
    stream
        .tokens()
        .iter()
        .position(|t| t.kind == TokenKind::DocCommentOpen)
        .expect("fixture has a doc comment")
}

/// Index of the first declaration keyword of the given kind
pub(crate) fn declaration(stream: &TokenStream, kind: DeclarationKind) -> usize {
    stream
        .tokens()
        .iter()
        .position(|t| t.kind == TokenKind::Declaration(kind))
        .expect("fixture has the declaration")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || c == '\\'
}

fn word_kind(word: &str) -> TokenKind {
    if let Some(kind) = DeclarationKind::from_keyword(word) {
        return TokenKind::Declaration(kind);
    }
    match word.to_ascii_lowercase().as_str() {
        "abstract" | "final" | "public" | "protected" | "private" | "static" => TokenKind::Modifier,
        _ => TokenKind::Identifier,
    }
}

/// Whitespace run, ending after the first newline
fn whitespace_len(rest: &str) -> usize {
    let mut len = 0;
    for c in rest.chars() {
        if !c.is_whitespace() {
            break;
        }
        len += c.len_utf8();
        if c == '\n' {
            break;
        }
    }
    len
}

fn lex_doc_comment(builder: &mut StreamBuilder, rest: &str) -> usize {
    let close = rest[3..].find("*/").map_or(rest.len(), |end| end + 3);
    let body = &rest[3..close];

    builder.push(TokenKind::DocCommentOpen, "/**");

    let mut line_start = false;
    for segment in body.split_inclusive('\n') {
        let (mut line, newline) = match segment.strip_suffix('\n') {
            Some(line) => (line, true),
            None => (segment, false),
        };

        if line_start {
            line = push_doc_whitespace(builder, line);
            if let Some(after) = line.strip_prefix('*') {
                builder.push(TokenKind::DocCommentStar, "*");
                line = after;
            }
        }

        line = push_doc_whitespace(builder, line);
        if line.starts_with('@') {
            let len = line.find(char::is_whitespace).unwrap_or(line.len());
            builder.push(TokenKind::DocCommentTag, &line[..len]);
            line = push_doc_whitespace(builder, &line[len..]);
        }

        let text = line.trim_end();
        if !text.is_empty() {
            builder.push(TokenKind::DocCommentString, text);
        }
        push_doc_whitespace(builder, &line[text.len()..]);

        if newline {
            builder.push(TokenKind::DocCommentWhitespace, "\n");
        }
        line_start = true;
    }

    if close < rest.len() {
        builder.push(TokenKind::DocCommentClose, "*/");
        close + 2
    } else {
        rest.len()
    }
}

fn push_doc_whitespace<'a>(builder: &mut StreamBuilder, line: &'a str) -> &'a str {
    let trimmed = line.trim_start();
    let len = line.len() - trimmed.len();
    if len > 0 {
        builder.push(TokenKind::DocCommentWhitespace, &line[..len]);
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_comment_tokens() {
        let stream = tokenize("/**\n * Text here\n */");
        let kinds: Vec<TokenKind> = stream.tokens().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::DocCommentOpen,
                TokenKind::DocCommentWhitespace,
                TokenKind::DocCommentWhitespace,
                TokenKind::DocCommentStar,
                TokenKind::DocCommentWhitespace,
                TokenKind::DocCommentString,
                TokenKind::DocCommentWhitespace,
                TokenKind::DocCommentWhitespace,
                TokenKind::DocCommentClose,
            ]
        );
        assert_eq!(stream.get(5).unwrap().text, "Text here");
        assert_eq!(stream.get(8).unwrap().line, 3);
    }

    #[test]
    fn test_declaration_tokens() {
        let stream = tokenize("abstract class Foo {}");
        assert_eq!(stream.get(0).unwrap().kind, TokenKind::Modifier);
        assert_eq!(
            stream.get(2).unwrap().kind,
            TokenKind::Declaration(DeclarationKind::Class)
        );
        assert_eq!(stream.declaration_name(2), Some("Foo"));
    }
}
