//! Block-comment tracking across a whole document.
//!
//! The line scanner only ever sees one line, so `/* ... */` regions are found
//! by a separate pass over the full text. The pass runs again after every
//! text change; spans are never patched in place.

use serde::Serialize;

/// One `/* ... */` region as absolute byte offsets `[start, end)`.
///
/// Both markers are included. An unterminated comment ends at the end of
/// the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommentSpan {
    pub start: usize,
    pub end: usize,
}

/// The block comments of a document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockComments {
    spans: Vec<CommentSpan>,
}

impl BlockComments {
    /// Scans `text` once, left to right, and records every block comment.
    ///
    /// Outside a comment a `/` always consumes the character after it, so
    /// `//*` does not open a comment. Inside a comment only `*/` matters.
    pub fn parse(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut spans = Vec::new();
        let mut open: Option<usize> = None;
        let mut pos = 0;

        while pos < bytes.len() {
            match (open, bytes[pos]) {
                (None, b'/') => {
                    if bytes.get(pos + 1) == Some(&b'*') {
                        open = Some(pos);
                    }
                    pos += 2;
                }
                (Some(start), b'*') if bytes.get(pos + 1) == Some(&b'/') => {
                    spans.push(CommentSpan {
                        start,
                        end: pos + 2,
                    });
                    open = None;
                    pos += 2;
                }
                _ => pos += 1,
            }
        }

        if let Some(start) = open {
            spans.push(CommentSpan {
                start,
                end: bytes.len(),
            });
        }

        tracing::debug!(spans = spans.len(), bytes = bytes.len(), "parsed block comments");
        Self { spans }
    }

    /// Returns true if the line `[start, end]` touches a block comment.
    ///
    /// A line is covered when a comment starts on it, ends on it, or
    /// encloses it entirely.
    pub fn contains_line(&self, start: usize, end: usize) -> bool {
        self.spans.iter().any(|span| {
            let starts_in_line = span.start >= start && span.start <= end;
            let ends_in_line = span.end > start && span.end <= end;
            let encloses_line = span.start <= start && span.end >= end;
            starts_in_line || ends_in_line || encloses_line
        })
    }

    pub fn spans(&self) -> &[CommentSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
