//! A text buffer paired with its highlighter.
//!
//! Every edit goes through [`Document`] so the block-comment spans are
//! rebuilt before anyone can style a line against stale offsets.

use glint_buffer::{Line, TextBuffer};
use glint_syntax::{Highlighter, LineStyler, Rgb, StyleRange};
use std::ops::Range;
use std::path::Path;

use crate::CoreResult;

/// A document whose lines can be styled.
pub struct Document {
    /// The underlying text buffer
    buffer: TextBuffer,

    /// Styler plus the block comments of the current text
    highlighter: Highlighter,

    /// Display name
    name: String,
}

impl Document {
    /// Creates a document from in-memory text.
    pub fn from_text(text: &str, styler: LineStyler) -> Self {
        let mut document = Self {
            buffer: TextBuffer::from(text),
            highlighter: Highlighter::new(styler),
            name: "Untitled".to_string(),
        };
        document.rehighlight();
        document
    }

    /// Opens a document from a file.
    pub fn open(path: impl AsRef<Path>, styler: LineStyler) -> CoreResult<Self> {
        let path = path.as_ref();
        let buffer = TextBuffer::from_file(path)?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("Unknown")
            .to_string();

        let mut document = Self {
            buffer,
            highlighter: Highlighter::new(styler),
            name,
        };
        document.rehighlight();

        tracing::debug!(
            path = %path.display(),
            lines = document.buffer.len_lines(),
            comments = document.highlighter.comments().spans().len(),
            "opened document"
        );
        Ok(document)
    }

    // ==================== Editing ====================

    /// Inserts text at a character index.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> CoreResult<()> {
        self.buffer.insert(char_idx, text)?;
        self.rehighlight();
        Ok(())
    }

    /// Deletes a character range.
    pub fn delete(&mut self, range: Range<usize>) -> CoreResult<String> {
        let deleted = self.buffer.delete(range)?;
        self.rehighlight();
        Ok(deleted)
    }

    /// Replaces a character range with new text.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> CoreResult<String> {
        let deleted = self.buffer.replace(range, text)?;
        self.rehighlight();
        Ok(deleted)
    }

    /// Replaces the whole text.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.rehighlight();
    }

    fn rehighlight(&mut self) {
        let text = self.buffer.text();
        self.highlighter.set_text(&text);
    }

    // ==================== Styling ====================

    /// Styles a single line.
    pub fn line_styles(&self, line_idx: usize, default_fg: Rgb) -> CoreResult<Vec<StyleRange>> {
        let line = self.buffer.line_at(line_idx)?;
        Ok(self.style(&line, default_fg))
    }

    /// Styles every line, in order.
    pub fn styled_lines(
        &self,
        default_fg: Rgb,
    ) -> impl Iterator<Item = (Line<'_>, Vec<StyleRange>)> + '_ {
        self.buffer.lines().map(move |line| {
            let styles = self.style(&line, default_fg);
            (line, styles)
        })
    }

    fn style(&self, line: &Line<'_>, default_fg: Rgb) -> Vec<StyleRange> {
        self.highlighter
            .style_line(line.offset, &line.text, default_fg)
    }

    // ==================== Getters ====================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.buffer.file_path()
    }

    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_syntax::TokenKind;

    fn document(text: &str) -> Document {
        Document::from_text(text, LineStyler::default())
    }

    fn kinds(doc: &Document, line: usize) -> Vec<TokenKind> {
        doc.line_styles(line, Rgb::BLACK)
            .unwrap()
            .into_iter()
            .map(|s| s.kind)
            .collect()
    }

    #[test]
    fn test_lines_inside_comment_are_single_range() {
        let doc = document("int a;\n/*\n int b;\n*/\nint c;");
        assert_eq!(kinds(&doc, 0), vec![TokenKind::Keyword]);
        assert_eq!(kinds(&doc, 2), vec![TokenKind::Comment]);
        assert_eq!(kinds(&doc, 4), vec![TokenKind::Keyword]);

        let inside = doc.line_styles(2, Rgb::BLACK).unwrap();
        assert_eq!((inside[0].start, inside[0].len), (10, 7));
    }

    #[test]
    fn test_edit_rebuilds_comments() {
        let mut doc = document("int a;\nint b;");
        assert_eq!(kinds(&doc, 1), vec![TokenKind::Keyword]);

        doc.insert(0, "/* ").unwrap();
        assert_eq!(kinds(&doc, 1), vec![TokenKind::Comment]);

        doc.delete(0..3).unwrap();
        assert_eq!(kinds(&doc, 1), vec![TokenKind::Keyword]);
        assert!(doc.is_modified());
    }

    #[test]
    fn test_set_text_rebuilds_comments() {
        let mut doc = document("/* x */");
        assert_eq!(doc.highlighter().comments().spans().len(), 1);
        doc.set_text("x");
        assert!(doc.highlighter().comments().is_empty());
    }

    #[test]
    fn test_styled_lines_covers_every_line() {
        let doc = document("class A {\n  // hi\n}\n");
        let lines: Vec<_> = doc.styled_lines(Rgb::BLACK).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].1[0].kind, TokenKind::Comment);
        assert_eq!(lines[1].1[0].start, 12);
        assert!(lines[3].1.is_empty());
    }

    #[test]
    fn test_line_out_of_range() {
        let doc = document("x");
        assert!(doc.line_styles(5, Rgb::BLACK).is_err());
    }

    #[test]
    fn test_open_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Hello.java");
        std::fs::write(&path, "public class Hello {}\n").unwrap();

        let doc = Document::open(&path, LineStyler::default()).unwrap();
        assert_eq!(doc.name(), "Hello.java");
        assert_eq!(doc.path(), Some(path.as_path()));
        assert!(!doc.is_modified());
        assert_eq!(kinds(&doc, 0), vec![TokenKind::Keyword]);
    }
}
