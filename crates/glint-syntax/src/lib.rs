//! # Glint Syntax
//!
//! Fuzzy, line-at-a-time syntax styling for C-family source text.
//!
//! ## Pieces
//!
//! - [`Scanner`] splits one line into tokens. It never fails and never looks
//!   past the end of the line.
//! - [`BlockComments`] finds every `/* ... */` region in a whole document.
//!   It is rebuilt from scratch whenever the text changes.
//! - [`LineStyler`] combines the two into merged [`StyleRange`]s for a
//!   renderer.
//! - [`Highlighter`] owns the block comments of one document and styles its
//!   lines on request.
//!
//! ```
//! use glint_syntax::{Highlighter, Rgb};
//!
//! let mut highlighter = Highlighter::default();
//! highlighter.set_text("/* doc */\nint x;");
//!
//! let styles = highlighter.style_line(10, "int x;", Rgb::BLACK);
//! assert_eq!(styles.len(), 1);
//! assert!(styles[0].bold);
//! ```

mod block_comment;
mod keywords;
mod palette;
mod scanner;
mod styler;
mod token;

pub use block_comment::{BlockComments, CommentSpan};
pub use keywords::KeywordSet;
pub use palette::{Palette, Rgb};
pub use scanner::Scanner;
pub use styler::{LineStyler, StyleRange};
pub use token::{Token, TokenKind};

/// Errors raised while building a palette.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("Palette is missing a color for `{0}`")]
    MissingCategory(&'static str),

    #[error("Unknown token category: {0}")]
    UnknownCategory(String),

    #[error("Invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),
}

/// Styles the lines of one document.
///
/// Holds the document's block comments between text changes. Styling only
/// reads them; [`Highlighter::set_text`] replaces them wholesale.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    styler: LineStyler,
    comments: BlockComments,
}

impl Highlighter {
    /// Creates a highlighter for an empty document.
    pub fn new(styler: LineStyler) -> Self {
        Self {
            styler,
            comments: BlockComments::default(),
        }
    }

    /// Re-scans the full document for block comments.
    pub fn set_text(&mut self, text: &str) {
        self.comments = BlockComments::parse(text);
    }

    /// Styles one line starting at absolute offset `line_offset`.
    pub fn style_line(&self, line_offset: usize, line: &str, default_fg: Rgb) -> Vec<StyleRange> {
        self.styler
            .style_line(line_offset, line, &self.comments, default_fg)
    }

    pub fn comments(&self) -> &BlockComments {
        &self.comments
    }

    pub fn styler(&self) -> &LineStyler {
        &self.styler
    }
}
