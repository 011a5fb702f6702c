//! Token stream fixtures built through the public `StreamBuilder`

#![allow(dead_code)]

use docsniff_core::{DeclarationKind, StreamBuilder, TokenKind, TokenStream};

/// A stream holding one documented declaration
pub struct Fixture {
    pub stream: TokenStream,
    pub open: usize,
    pub declaration: usize,
}

/// Push a doc comment whose body lines are written as they appear in source,
/// e.g. `" * Does a thing."`. Returns the index of `/**`.
pub fn push_doc_comment(builder: &mut StreamBuilder, lines: &[&str]) -> usize {
    let open = builder.next_index();
    builder
        .push(TokenKind::DocCommentOpen, "/**")
        .push(TokenKind::DocCommentWhitespace, "\n");

    for line in lines {
        let mut rest = push_whitespace(builder, line);
        if let Some(after) = rest.strip_prefix('*') {
            builder.push(TokenKind::DocCommentStar, "*");
            rest = push_whitespace(builder, after);
        }
        if rest.starts_with('@') {
            let len = rest.find(' ').unwrap_or(rest.len());
            builder.push(TokenKind::DocCommentTag, &rest[..len]);
            rest = push_whitespace(builder, &rest[len..]);
        }
        if !rest.is_empty() {
            builder.push(TokenKind::DocCommentString, rest);
        }
        builder.push(TokenKind::DocCommentWhitespace, "\n");
    }

    builder
        .push(TokenKind::DocCommentWhitespace, " ")
        .push(TokenKind::DocCommentClose, "*/");
    open
}

/// `<?php namespace Acme;`, blank lines, the comment, blank lines, then
/// `<keyword> <name> {}`
pub fn documented(
    kind: DeclarationKind,
    name: &str,
    blank_before: usize,
    lines: &[&str],
    blank_after: usize,
) -> Fixture {
    let mut builder = TokenStream::builder();
    builder
        .push(TokenKind::OpenTag, "<?php")
        .push(TokenKind::Whitespace, "\n")
        .push(TokenKind::Identifier, "namespace")
        .push(TokenKind::Whitespace, " ")
        .push(TokenKind::Identifier, "Acme")
        .push(TokenKind::Other, ";")
        .push(TokenKind::Whitespace, "\n");
    for _ in 0..blank_before {
        builder.push(TokenKind::Whitespace, "\n");
    }

    let open = push_doc_comment(&mut builder, lines);

    builder.push(TokenKind::Whitespace, "\n");
    for _ in 0..blank_after {
        builder.push(TokenKind::Whitespace, "\n");
    }
    let declaration = push_declaration(&mut builder, kind, name);

    Fixture {
        stream: builder.build().unwrap(),
        open,
        declaration,
    }
}

/// A stream with only the comment after `<?php` and a blank line
pub fn comment_only(lines: &[&str]) -> (TokenStream, usize) {
    let mut builder = TokenStream::builder();
    builder
        .push(TokenKind::OpenTag, "<?php")
        .push(TokenKind::Whitespace, "\n")
        .push(TokenKind::Whitespace, "\n");
    let open = push_doc_comment(&mut builder, lines);
    builder.push(TokenKind::Whitespace, "\n");
    (builder.build().unwrap(), open)
}

fn push_declaration(builder: &mut StreamBuilder, kind: DeclarationKind, name: &str) -> usize {
    let declaration = builder.next_index();
    builder
        .push(TokenKind::Declaration(kind), kind.keyword())
        .push(TokenKind::Whitespace, " ")
        .push(TokenKind::Identifier, name)
        .push(TokenKind::Whitespace, "\n")
        .push(TokenKind::Other, "{")
        .push(TokenKind::Whitespace, "\n")
        .push(TokenKind::Other, "}")
        .push(TokenKind::Whitespace, "\n");
    declaration
}

fn push_whitespace<'a>(builder: &mut StreamBuilder, text: &'a str) -> &'a str {
    let trimmed = text.trim_start();
    let len = text.len() - trimmed.len();
    if len > 0 {
        builder.push(TokenKind::DocCommentWhitespace, &text[..len]);
    }
    trimmed
}
