//! Styling configuration.
//!
//! Loaded from TOML. `#[serde(default)]` fills in anything the file leaves
//! out, except that a `[highlight.colors]` table, once given, must name
//! every token category.

use glint_syntax::{KeywordSet, LineStyler, Palette, Rgb, SyntaxError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Line styling settings
    pub highlight: HighlightConfig,
}

impl Config {
    /// Loads config from the default location.
    ///
    /// Defaults are used only when no config file exists; a file that fails
    /// to read or parse is an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(Self::default_path()?)
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("glint").join("config.toml"))
    }

    /// Renders the config as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builds the line styler described by this config.
    pub fn line_styler(&self) -> Result<LineStyler, ConfigError> {
        Ok(LineStyler::new(
            self.highlight.keyword_set(),
            self.highlight.palette()?,
        ))
    }
}

/// Keyword, palette and foreground settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Foreground the renderer draws unstyled text with
    pub default_foreground: Rgb,

    /// Replacement keyword list (None = Java keywords)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    /// Color per token category
    pub colors: BTreeMap<String, String>,
}

impl HighlightConfig {
    /// Validates the color table.
    pub fn palette(&self) -> Result<Palette, SyntaxError> {
        Palette::from_table(&self.colors)
    }

    pub fn keyword_set(&self) -> KeywordSet {
        match &self.keywords {
            Some(words) => KeywordSet::from_words(words.iter().cloned()),
            None => KeywordSet::java(),
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            default_foreground: Rgb::BLACK,
            keywords: None,
            colors: Palette::default().to_table(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid highlight settings: {0}")]
    Syntax(#[from] SyntaxError),
}
