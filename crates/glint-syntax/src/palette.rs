//! Colors and the per-kind palette.
//!
//! Colors are plain values here. Allocating display resources for them is
//! the renderer's job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::SyntaxError;
use crate::token::{KIND_COUNT, TokenKind};

/// An RGB color, written as `#rrggbb` in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn parse(s: &str) -> Result<Self, SyntaxError> {
        let invalid = || SyntaxError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = SyntaxError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// One color per [`TokenKind`]. Keywords are always drawn bold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; KIND_COUNT],
}

impl Palette {
    /// Builds a palette from a `kind -> color` table.
    ///
    /// Every kind must be present and no unknown kinds are allowed.
    pub fn from_table<I, K, V>(table: I) -> Result<Self, SyntaxError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut colors: [Option<Rgb>; KIND_COUNT] = [None; KIND_COUNT];

        for (key, value) in table {
            let key = key.as_ref();
            let kind = TokenKind::from_config_key(key)
                .ok_or_else(|| SyntaxError::UnknownCategory(key.to_string()))?;
            colors[kind.index()] = Some(Rgb::parse(value.as_ref())?);
        }

        let mut resolved = [Rgb::BLACK; KIND_COUNT];
        for kind in TokenKind::ALL {
            resolved[kind.index()] =
                colors[kind.index()].ok_or(SyntaxError::MissingCategory(kind.config_key()))?;
        }

        Ok(Self { colors: resolved })
    }

    /// Returns the color for a token kind.
    #[inline]
    pub fn color(&self, kind: TokenKind) -> Rgb {
        self.colors[kind.index()]
    }

    /// Returns whether a token kind is drawn bold.
    #[inline]
    pub fn is_bold(&self, kind: TokenKind) -> bool {
        kind == TokenKind::Keyword
    }

    /// Replaces the color of one kind.
    pub fn with_color(mut self, kind: TokenKind, color: Rgb) -> Self {
        self.colors[kind.index()] = color;
        self
    }

    /// Returns the palette as a `kind -> #rrggbb` table.
    pub fn to_table(&self) -> BTreeMap<String, String> {
        TokenKind::ALL
            .into_iter()
            .map(|kind| (kind.config_key().to_string(), self.color(kind).to_string()))
            .collect()
    }
}

impl Default for Palette {
    /// Black text, blue keywords, red comments, green literals.
    fn default() -> Self {
        let mut colors = [Rgb::BLACK; KIND_COUNT];
        colors[TokenKind::Keyword.index()] = Rgb::BLUE;
        colors[TokenKind::Comment.index()] = Rgb::RED;
        colors[TokenKind::String.index()] = Rgb::GREEN;
        Self { colors }
    }
}
