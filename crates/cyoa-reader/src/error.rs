//! Error types for navigation and reading.

use cyoa_core::PageNumber;
use thiserror::Error;

/// Result type for navigation operations.
pub type NavResult<T> = Result<T, NavError>;

/// Result type for a whole reading session.
pub type ReadResult<T> = Result<T, ReadError>;

/// Recoverable errors from resolving the reader's input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// No page in the book has this number. Holds whatever integer was
    /// asked for, including zero and negatives.
    #[error("There is no page {0} in this book.")]
    PageNotFound(i64),

    /// The input is not a page number.
    #[error("\"{0}\" is not a valid input.")]
    InvalidInput(String),
}

/// Errors that end a reading session.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The configured first page is not in the book.
    #[error("the book has no page {0} to start from")]
    StartPageMissing(PageNumber),

    /// Input ran out before an ending was reached.
    #[error("input closed before the story reached an ending")]
    InputClosed,

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
