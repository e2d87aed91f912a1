use std::path::PathBuf;

use crate::page::PageNumber;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while loading a story.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// The story file could not be read.
    #[error("failed to read story file {}", path.display())]
    Read {
        /// The path that was opened.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The story text is not valid YAML or does not have the book shape.
    #[error("malformed story: {0}")]
    Syntax(#[from] serde_yaml::Error),

    /// The story parsed but one of its values makes no sense as a book.
    #[error("malformed story: {0}")]
    Format(String),

    /// Two pages share a number and duplicates were not allowed.
    #[error("page {0} is defined more than once")]
    DuplicatePage(PageNumber),
}

/// A value that cannot be used as a page number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a valid page number")]
pub struct InvalidPageNumber(pub String);
