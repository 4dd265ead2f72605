//! Core text buffer implementation using a rope.
//!
//! Styling works in absolute byte offsets, so besides the usual char-indexed
//! edits the buffer hands out every line together with the byte offset at
//! which it starts.

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::{BufferError, BufferResult};

/// One line of a buffer, without its line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// 0-based line number
    pub index: usize,
    /// Absolute byte offset of the first character
    pub offset: usize,
    /// Line content, terminator stripped
    pub text: Cow<'a, str>,
}

impl Line<'_> {
    /// Absolute byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// A text buffer backed by a rope data structure.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,

    /// Whether the buffer changed since it was loaded
    modified: bool,

    /// Associated file path (if any)
    file_path: Option<PathBuf>,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    ///
    /// # Example
    /// ```
    /// use glint_buffer::TextBuffer;
    ///
    /// let buffer = TextBuffer::new();
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a buffer from a file.
    pub fn from_file(path: impl AsRef<Path>) -> BufferResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        Ok(Self {
            rope: Rope::from_str(&content),
            modified: false,
            file_path: Some(path.to_path_buf()),
        })
    }

    // ==================== Text Access ====================

    /// Returns the entire text content.
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        self.rope.slice(..).into()
    }

    /// Returns a specific line (0-indexed), including its terminator.
    pub fn line(&self, line_idx: usize) -> BufferResult<Cow<'_, str>> {
        self.check_line(line_idx)?;
        Ok(self.rope.line(line_idx).into())
    }

    /// Returns a line with its absolute byte offset, terminator stripped.
    pub fn line_at(&self, line_idx: usize) -> BufferResult<Line<'_>> {
        self.check_line(line_idx)?;
        Ok(self.make_line(line_idx))
    }

    /// Iterates over every line with its absolute byte offset.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> + '_ {
        (0..self.len_lines()).map(move |idx| self.make_line(idx))
    }

    fn make_line(&self, line_idx: usize) -> Line<'_> {
        Line {
            index: line_idx,
            offset: self.rope.line_to_byte(line_idx),
            text: strip_line_break(self.rope.line(line_idx).into()),
        }
    }

    fn check_line(&self, line_idx: usize) -> BufferResult<()> {
        if line_idx >= self.len_lines() {
            return Err(BufferError::LineOutOfBounds(line_idx));
        }
        Ok(())
    }

    // ==================== Measurements ====================

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of characters (Unicode scalar values).
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    #[inline]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Returns the number of lines in the buffer.
    ///
    /// An empty buffer has 1 line. A buffer ending with `\n` counts
    /// the empty line after it.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Converts a character index to a byte offset.
    pub fn char_to_byte(&self, char_idx: usize) -> BufferResult<usize> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }
        Ok(self.rope.char_to_byte(char_idx))
    }

    // ==================== Mutations ====================

    /// Inserts text at a character index.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> BufferResult<()> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }
        self.rope.insert(char_idx, text);
        self.modified = true;
        Ok(())
    }

    /// Deletes text in a character range, returning what was removed.
    pub fn delete(&mut self, range: Range<usize>) -> BufferResult<String> {
        if range.start > range.end {
            return Err(BufferError::InvalidCharIndex(range.start));
        }
        if range.end > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(range.end));
        }

        let deleted: String = self.rope.slice(range.clone()).into();
        self.rope.remove(range);
        self.modified = true;
        Ok(deleted)
    }

    /// Replaces text in a range with new text.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> BufferResult<String> {
        let deleted = self.delete(range.clone())?;
        self.insert(range.start, text)?;
        Ok(deleted)
    }

    /// Replaces the whole content.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.modified = true;
    }

    // ==================== State Queries ====================

    /// Returns true if the buffer has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Returns the associated file path, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
            modified: false,
            file_path: None,
        }
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

/// Drops a trailing `\r\n` or single line-break character.
fn strip_line_break(text: Cow<'_, str>) -> Cow<'_, str> {
    let keep = text.len() - line_break_len(&text);
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(&s[..keep]),
        Cow::Owned(mut s) => {
            s.truncate(keep);
            Cow::Owned(s)
        }
    }
}

fn line_break_len(s: &str) -> usize {
    if s.ends_with("\r\n") {
        return 2;
    }
    s.chars()
        .next_back()
        .filter(|c| {
            matches!(
                c,
                '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
            )
        })
        .map_or(0, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_carry_byte_offsets() {
        let buffer = TextBuffer::from("int a;\n/* é */\r\nint b;");
        let lines: Vec<_> = buffer.lines().map(|l| (l.offset, l.text.into_owned())).collect();
        assert_eq!(
            lines,
            vec![
                (0, "int a;".to_string()),
                (7, "/* é */".to_string()),
                (17, "int b;".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_newline_gives_empty_last_line() {
        let buffer = TextBuffer::from("x\n");
        let last = buffer.line_at(1).unwrap();
        assert_eq!(last.offset, 2);
        assert_eq!(last.text, "");
        assert_eq!(last.end(), 2);
    }

    #[test]
    fn test_line_out_of_bounds() {
        let buffer = TextBuffer::from("one");
        assert!(matches!(
            buffer.line_at(1),
            Err(BufferError::LineOutOfBounds(1))
        ));
    }

    #[test]
    fn test_char_to_byte() {
        let buffer = TextBuffer::from("éa");
        assert_eq!(buffer.char_to_byte(1).unwrap(), 2);
        assert!(buffer.char_to_byte(3).is_err());
    }

    #[test]
    fn test_replace_and_set_text() {
        let mut buffer = TextBuffer::from("int x;");
        assert!(!buffer.is_modified());

        let old = buffer.replace(0..3, "long").unwrap();
        assert_eq!(old, "int");
        assert_eq!(buffer.text(), "long x;");
        assert!(buffer.is_modified());

        buffer.set_text("a\nb");
        assert_eq!(buffer.len_lines(), 2);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"class A {}\n").unwrap();

        let buffer = TextBuffer::from_file(file.path()).unwrap();
        assert_eq!(buffer.file_path(), Some(file.path()));
        assert_eq!(buffer.line_at(0).unwrap().text, "class A {}");
    }
}
