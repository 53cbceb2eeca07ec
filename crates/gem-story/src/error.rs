//! Error types for the story engine.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while running a story.
///
/// Bad menu input is not an error: the prompter re-asks until it gets a
/// valid answer. Only the console itself can fail.
#[derive(Debug, Error)]
pub enum StoryError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the story finished.
    #[error("input closed before the story finished")]
    InputClosed,
}
