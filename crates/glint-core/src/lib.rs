//! # Glint Core
//!
//! Configuration and styled documents.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                 Document                 │
//! │  ┌────────────┐      ┌────────────────┐  │
//! │  │ TextBuffer │ ───> │  Highlighter   │  │
//! │  │   (rope)   │ text │ block comments │  │
//! │  └────────────┘      │ + LineStyler   │  │
//! │                      └────────────────┘  │
//! └──────────────────────────────────────────┘
//!                 ▲
//!                 │ palette, keywords
//!             ┌────────┐
//!             │ Config │
//!             └────────┘
//! ```

pub mod config;
pub mod document;

pub use config::{Config, ConfigError, HighlightConfig};
pub use document::Document;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Buffer error: {0}")]
    Buffer(#[from] glint_buffer::BufferError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_syntax::SyntaxError;

    #[test]
    fn test_syntax_error_reaches_core_error_through_config() {
        let err: CoreError = ConfigError::from(SyntaxError::MissingCategory("keyword")).into();
        assert!(matches!(
            err,
            CoreError::Config(ConfigError::Syntax(SyntaxError::MissingCategory("keyword")))
        ));
    }
}
