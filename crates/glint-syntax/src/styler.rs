//! Turns one line into merged style ranges.

use serde::Serialize;

use crate::block_comment::BlockComments;
use crate::keywords::KeywordSet;
use crate::palette::{Palette, Rgb};
use crate::scanner::Scanner;
use crate::token::TokenKind;

/// A span of text the renderer should draw with a color and weight.
///
/// `start` is an absolute byte offset into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleRange {
    pub start: usize,
    pub len: usize,
    pub kind: TokenKind,
    pub color: Rgb,
    pub bold: bool,
}

impl StyleRange {
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Same look: kind, color and weight all match.
    fn similar_to(&self, other: &StyleRange) -> bool {
        self.kind == other.kind && self.color == other.color && self.bold == other.bold
    }
}

/// Ordered style ranges that merge as they are pushed.
#[derive(Debug, Default)]
struct StyleRanges {
    ranges: Vec<StyleRange>,
}

impl StyleRanges {
    /// Appends `range`, extending the last range instead when the two look
    /// the same and touch.
    fn push(&mut self, range: StyleRange) {
        match self.ranges.last_mut() {
            Some(last) if last.similar_to(&range) && last.end() == range.start => {
                last.len += range.len;
            }
            _ => self.ranges.push(range),
        }
    }

    /// Extends a trailing bold range over whitespace that starts where it
    /// ends. Other ranges never absorb whitespace.
    fn absorb_whitespace(&mut self, start: usize, len: usize) {
        if let Some(last) = self.ranges.last_mut() {
            if last.bold && last.end() == start {
                last.len += len;
            }
        }
    }

    fn into_vec(self) -> Vec<StyleRange> {
        self.ranges
    }
}

/// Styles single lines with a fixed keyword set and palette.
#[derive(Debug, Clone, Default)]
pub struct LineStyler {
    keywords: KeywordSet,
    palette: Palette,
}

impl LineStyler {
    pub fn new(keywords: KeywordSet, palette: Palette) -> Self {
        Self { keywords, palette }
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Computes the style ranges for one line.
    ///
    /// `line_offset` is the absolute offset of the line start and
    /// `default_fg` is the renderer's current foreground color. Tokens drawn
    /// in the default color are skipped, except keywords which still need
    /// their bold weight.
    pub fn style_line(
        &self,
        line_offset: usize,
        line: &str,
        comments: &BlockComments,
        default_fg: Rgb,
    ) -> Vec<StyleRange> {
        if comments.contains_line(line_offset, line_offset + line.len()) {
            return vec![StyleRange {
                start: line_offset,
                len: line.len(),
                kind: TokenKind::Comment,
                color: self.palette.color(TokenKind::Comment),
                bold: false,
            }];
        }

        let mut styles = StyleRanges::default();
        for token in Scanner::new(&self.keywords, line) {
            let start = line_offset + token.start;
            match token.kind {
                TokenKind::Other => {}
                TokenKind::Whitespace => styles.absorb_whitespace(start, token.len),
                kind => {
                    let color = self.palette.color(kind);
                    if color != default_fg || kind == TokenKind::Keyword {
                        styles.push(StyleRange {
                            start,
                            len: token.len,
                            kind,
                            color,
                            bold: self.palette.is_bold(kind),
                        });
                    }
                }
            }
        }

        let styles = styles.into_vec();
        tracing::trace!(line_offset, ranges = styles.len(), "styled line");
        styles
    }
}
