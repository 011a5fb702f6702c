#[path = "../common/mod.rs"]
mod common;

use common::comment_only;
use docsniff_core::{DiagnosticKind, TokenKind};
use docsniff_rules::{CommentValidator, Description, DocCommentParser, TokenSpan, ValidationProfile};
use proptest::prelude::*;

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z{][a-z .!?}]{0,12}".prop_map(|text| format!(" * {}", text)),
        Just(" *".to_string()),
        "[a-z][a-z .]{0,12}".prop_map(|text| format!("   {}", text)),
        "[a-z]{1,6}".prop_map(|tag| format!(" * @{} value", tag)),
    ]
}

fn description(text: &str) -> Description {
    Description {
        text: text.to_string(),
        line: 2,
        end_line: 2,
        span: TokenSpan { start: 3, end: 3 },
    }
}

proptest! {
    #[test]
    fn parsing_is_idempotent(lines in prop::collection::vec(line(), 0..8)) {
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        let (stream, open) = comment_only(&lines);
        let first = DocCommentParser::parse(&stream, open).unwrap();
        let second = DocCommentParser::parse(&stream, open).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn long_description_needs_short(lines in prop::collection::vec(line(), 0..8)) {
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        let (stream, open) = comment_only(&lines);
        let comment = DocCommentParser::parse(&stream, open).unwrap();
        if !comment.long_description().is_empty() {
            prop_assert!(!comment.short_description().is_empty());
        }
    }

    #[test]
    fn junk_is_unstarred_text_before_tags(lines in prop::collection::vec(line(), 0..8)) {
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        let (stream, open) = comment_only(&lines);
        let comment = DocCommentParser::parse(&stream, open).unwrap();
        let close = stream.comment_closer(open).unwrap();

        let mut expected = Vec::new();
        let mut starred_line = None;
        for index in open + 1..close {
            let token = stream.get(index).unwrap();
            match token.kind {
                TokenKind::DocCommentStar => starred_line = Some(token.line),
                TokenKind::DocCommentTag => break,
                TokenKind::DocCommentString if starred_line != Some(token.line) => {
                    expected.push(index)
                }
                _ => {}
            }
        }

        prop_assert_eq!(comment.junk(), expected.as_slice());
    }

    #[test]
    fn parse_range_never_panics(
        lines in prop::collection::vec(line(), 0..6),
        open in 0usize..64,
        close in 0usize..64,
    ) {
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        let (stream, _) = comment_only(&lines);
        let comment = DocCommentParser::parse_range(stream.tokens(), open, close);
        prop_assert!(comment.close_index() < stream.len());
        prop_assert!(comment.start_line() <= comment.end_line());
    }

    #[test]
    fn capitalization_fix_is_accepted(text in "[a-zA-Zé][a-zA-Z .,!?]{0,20}") {
        let validator = CommentValidator::new(ValidationProfile::Class, "class");
        let kind = DiagnosticKind::ShortDescriptionNotCapitalized;
        if let Some(diagnostic) = validator.check_capitalization(kind, &description(&text)) {
            let fixed = diagnostic.replacement.unwrap();
            prop_assert!(validator.check_capitalization(kind, &description(&fixed)).is_none());
        }
    }

    #[test]
    fn punctuation_fix_is_accepted(text in "[A-Za-z][a-zA-Z ,;:]{0,20}[a-z.!?]") {
        let validator = CommentValidator::new(ValidationProfile::Function, "function");
        let kind = DiagnosticKind::ShortDescriptionNoPunctuation;
        if let Some(diagnostic) = validator.check_punctuation(kind, &description(&text)) {
            let fixed = diagnostic.replacement.unwrap();
            prop_assert_eq!(&fixed, &format!("{}.", text));
            prop_assert!(validator.check_punctuation(kind, &description(&fixed)).is_none());
        }
    }
}
