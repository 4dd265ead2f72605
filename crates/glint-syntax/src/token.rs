//! Token kinds produced by the scanner.

use serde::{Deserialize, Serialize};

/// Number of [`TokenKind`] variants.
pub(crate) const KIND_COUNT: usize = 7;

/// Classification of a lexical run within a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Identifier,
    Whitespace,
    Keyword,
    /// A `//` line comment. Lines inside block comments are styled with
    /// this kind too.
    Comment,
    /// String or character literal, terminated or not.
    String,
    Number,
    Other,
}

impl TokenKind {
    /// Every kind, in palette order.
    pub const ALL: [TokenKind; KIND_COUNT] = [
        TokenKind::Identifier,
        TokenKind::Whitespace,
        TokenKind::Keyword,
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Other,
    ];

    /// Returns the configuration key for this kind.
    pub fn config_key(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Keyword => "keyword",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Other => "other",
        }
    }

    /// Looks a kind up by its configuration key.
    pub fn from_config_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.config_key() == key)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.config_key())
    }
}

/// A token within a line. Offsets are byte offsets relative to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub len: usize,
}

impl Token {
    /// Byte offset one past the end of the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}
