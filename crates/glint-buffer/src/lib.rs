//! # Glint Buffer
//!
//! Document text stored in a rope, handed out line by line with absolute
//! byte offsets so a line styler can place its ranges in the document.

mod buffer;

pub use buffer::{Line, TextBuffer};

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Line {0} is out of bounds")]
    LineOutOfBounds(usize),

    #[error("Invalid character index: {0}")]
    InvalidCharIndex(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
