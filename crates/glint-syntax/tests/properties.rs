//! Property-based tests for the scanner and line styler.

use glint_syntax::{BlockComments, KeywordSet, LineStyler, Palette, Rgb, Scanner, TokenKind};
use proptest::prelude::*;

/// Lines built from the characters the scanner treats specially.
fn line_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r#"[a-z_$0-9 \t/*'"\\;=(){}é]{0,40}"#).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn tokens_cover_line_contiguously(line in line_strategy()) {
        let keywords = KeywordSet::java();
        let mut expected_start = 0;
        for token in Scanner::new(&keywords, &line) {
            prop_assert_eq!(token.start, expected_start);
            prop_assert!(token.len > 0);
            expected_start = token.end();
        }
        prop_assert_eq!(expected_start, line.len());
    }

    #[test]
    fn arbitrary_text_terminates(line in any::<String>()) {
        let keywords = KeywordSet::java();
        let total: usize = Scanner::new(&keywords, &line).map(|t| t.len).sum();
        prop_assert_eq!(total, line.len());
    }

    #[test]
    fn identifiers_classified_by_keyword_set(word in "[a-z]{1,12}") {
        let keywords = KeywordSet::java();
        let tokens: Vec<_> = Scanner::new(&keywords, &word).collect();
        prop_assert_eq!(tokens.len(), 1);
        let expected = if keywords.contains(&word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        prop_assert_eq!(tokens[0].kind, expected);
    }

    #[test]
    fn styles_are_ordered_and_within_line(offset in 0usize..1000, line in line_strategy()) {
        let styler = LineStyler::default();
        let styles = styler.style_line(offset, &line, &BlockComments::default(), Rgb::BLACK);

        let mut previous_end = offset;
        for style in &styles {
            prop_assert!(style.start >= previous_end);
            prop_assert!(style.len > 0);
            prop_assert!(style.end() <= offset + line.len());
            prop_assert_ne!(style.kind, TokenKind::Other);
            previous_end = style.end();
        }
    }

    #[test]
    fn neighbours_never_left_unmerged(line in line_strategy()) {
        let styler = LineStyler::new(KeywordSet::java(), Palette::default());
        let styles = styler.style_line(0, &line, &BlockComments::default(), Rgb::BLACK);
        for pair in styles.windows(2) {
            let touching = pair[0].end() == pair[1].start;
            let similar = pair[0].kind == pair[1].kind
                && pair[0].color == pair[1].color
                && pair[0].bold == pair[1].bold;
            prop_assert!(!(touching && similar));
        }
    }

    #[test]
    fn styling_is_idempotent(line in line_strategy(), text in line_strategy()) {
        let comments = BlockComments::parse(&text);
        let styler = LineStyler::default();
        let first = styler.style_line(0, &line, &comments, Rgb::BLACK);
        let second = styler.style_line(0, &line, &comments, Rgb::BLACK);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn block_comment_spans_are_ordered(text in "[a/* \n]{0,60}") {
        let comments = BlockComments::parse(&text);
        let mut previous_end = 0;
        for span in comments.spans() {
            prop_assert!(span.start >= previous_end);
            prop_assert!(span.end > span.start);
            prop_assert!(span.end <= text.len());
            prop_assert_eq!(&text[span.start..span.start + 2], "/*");
            previous_end = span.end;
        }
    }
}
