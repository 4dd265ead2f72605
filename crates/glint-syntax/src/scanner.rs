//! Fuzzy single-line scanner.
//!
//! The scanner approximates a C-family lexical grammar closely enough for
//! display. It never fails: unterminated literals are still literals, and
//! every character of the input ends up in exactly one token.
//!
//! Block comments are not recognized here. A line never spans a scan, so
//! multi-line constructs are tracked by [`crate::BlockComments`] instead.

use crate::keywords::KeywordSet;
use crate::token::{Token, TokenKind};

/// Scans one line of text into [`Token`]s.
///
/// # Example
/// ```
/// use glint_syntax::{KeywordSet, Scanner, TokenKind};
///
/// let keywords = KeywordSet::java();
/// let kinds: Vec<_> = Scanner::new(&keywords, "int x")
///     .map(|t| t.kind)
///     .collect();
/// assert_eq!(kinds, [TokenKind::Keyword, TokenKind::Whitespace, TokenKind::Identifier]);
/// ```
pub struct Scanner<'a> {
    keywords: &'a KeywordSet,
    input: &'a str,
    /// Byte offset of the next character to read
    pos: usize,
    /// Byte offset where the current token began
    start: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `input`.
    pub fn new(keywords: &'a KeywordSet, input: &'a str) -> Self {
        Self {
            keywords,
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Resets the scanner over a new line.
    pub fn set_input(&mut self, input: &'a str) {
        self.input = input;
        self.pos = 0;
        self.start = 0;
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        self.start = self.pos;
        let c = self.read()?;

        let kind = match c {
            '/' => {
                let next = self.read();
                if next == Some('/') {
                    self.skip_line_comment();
                    TokenKind::Comment
                } else {
                    self.unread(next);
                    TokenKind::Other
                }
            }
            '\'' | '"' => {
                self.skip_literal(c);
                TokenKind::String
            }
            '0'..='9' => {
                self.skip_while(|c| c.is_ascii_digit());
                TokenKind::Number
            }
            c if c.is_whitespace() => {
                self.skip_while(char::is_whitespace);
                TokenKind::Whitespace
            }
            c if is_identifier_start(c) => {
                self.skip_while(is_identifier_part);
                if self.keywords.contains(&self.input[self.start..self.pos]) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                }
            }
            _ => TokenKind::Other,
        };

        Some(Token {
            kind,
            start: self.start,
            len: self.pos - self.start,
        })
    }

    /// Byte offset of the current token's start.
    #[inline]
    pub fn start_offset(&self) -> usize {
        self.start
    }

    /// Length in bytes of the current token.
    #[inline]
    pub fn token_len(&self) -> usize {
        self.pos - self.start
    }

    // ==================== Character access ====================

    fn read(&mut self) -> Option<char> {
        let c = self.input[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Pushes back the character returned by the last `read`.
    fn unread(&mut self, c: Option<char>) {
        if let Some(c) = c {
            self.pos -= c.len_utf8();
        }
    }

    fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        loop {
            let c = self.read();
            match c {
                Some(c) if pred(c) => {}
                _ => {
                    self.unread(c);
                    return;
                }
            }
        }
    }

    /// Consumes up to, not including, the end of line.
    fn skip_line_comment(&mut self) {
        self.skip_while(|c| c != '\n');
    }

    /// Consumes through the closing `quote`, honoring `\` escapes.
    fn skip_literal(&mut self, quote: char) {
        loop {
            match self.read() {
                None => return,
                Some(c) if c == quote => return,
                Some('\\') => {
                    self.read();
                }
                Some(_) => {}
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn scan(input: &str) -> Vec<(TokenKind, &str)> {
        let keywords = KeywordSet::java();
        Scanner::new(&keywords, input)
            .map(|t| (t.kind, &input[t.start..t.end()]))
            .collect()
    }

    #[test]
    fn test_declaration() {
        assert_eq!(
            scan("int count = 42;"),
            vec![
                (Keyword, "int"),
                (Whitespace, " "),
                (Identifier, "count"),
                (Whitespace, " "),
                (Other, "="),
                (Whitespace, " "),
                (Number, "42"),
                (Other, ";"),
            ]
        );
    }

    #[test]
    fn test_line_comment_covers_rest_of_line() {
        assert_eq!(scan("//comment text"), vec![(Comment, "//comment text")]);
        assert_eq!(
            scan("x; // trailing"),
            vec![
                (Identifier, "x"),
                (Other, ";"),
                (Whitespace, " "),
                (Comment, "// trailing"),
            ]
        );
    }

    #[test]
    fn test_line_comment_stops_at_newline() {
        assert_eq!(scan("// a\n"), vec![(Comment, "// a"), (Whitespace, "\n")]);
    }

    #[test]
    fn test_slash_alone_is_other() {
        assert_eq!(
            scan("a/b"),
            vec![(Identifier, "a"), (Other, "/"), (Identifier, "b")]
        );
        assert_eq!(scan("/"), vec![(Other, "/")]);
    }

    #[test]
    fn test_block_comment_markers_not_recognized() {
        assert_eq!(
            scan("/* x */"),
            vec![
                (Other, "/"),
                (Other, "*"),
                (Whitespace, " "),
                (Identifier, "x"),
                (Whitespace, " "),
                (Other, "*"),
                (Other, "/"),
            ]
        );
    }

    #[test]
    fn test_string_with_escapes() {
        assert_eq!(
            scan(r#""a\"b" c"#),
            vec![(String, r#""a\"b""#), (Whitespace, " "), (Identifier, "c")]
        );
        assert_eq!(scan(r"'\''"), vec![(String, r"'\''")]);
    }

    #[test]
    fn test_unterminated_literal() {
        let tokens = scan("x = 'a");
        assert_eq!(tokens.last(), Some(&(String, "'a")));

        assert_eq!(scan(r#""abc\"#), vec![(String, r#""abc\"#)]);
    }

    #[test]
    fn test_numbers_are_digit_runs() {
        assert_eq!(
            scan("3.14"),
            vec![(Number, "3"), (Other, "."), (Number, "14")]
        );
        assert_eq!(scan("0x1F"), vec![(Number, "0"), (Identifier, "x1F")]);
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(scan("$foo_1"), vec![(Identifier, "$foo_1")]);
        assert_eq!(scan("naïve"), vec![(Identifier, "naïve")]);
        assert_eq!(scan("classy"), vec![(Identifier, "classy")]);
    }

    #[test]
    fn test_set_input_resets_position() {
        let keywords = KeywordSet::java();
        let mut scanner = Scanner::new(&keywords, "first");
        assert_eq!(scanner.next_token().map(|t| t.len), Some(5));
        assert_eq!(scanner.next_token(), None);

        scanner.set_input("if");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, Keyword);
        assert_eq!(scanner.start_offset(), 0);
        assert_eq!(scanner.token_len(), 2);
        assert_eq!(scanner.next_token(), None);
    }

    #[test]
    fn test_empty_input() {
        assert!(scan("").is_empty());
    }
}
