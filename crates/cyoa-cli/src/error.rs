//! Fatal errors reported by the `cyoa` binary.

use cyoa_core::StoryError;
use cyoa_reader::ReadError;
use miette::Diagnostic;
use thiserror::Error;

/// Anything that stops `cyoa` before the story reaches an ending.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// Wrong arguments on the command line.
    #[error("{0}")]
    #[diagnostic(
        code(cyoa::usage),
        help("pass a single argument, the filename of the story (ex: story.yaml)")
    )]
    Usage(String),

    /// The story could not be loaded.
    #[error(transparent)]
    #[diagnostic(
        code(cyoa::load),
        help("a story is a YAML mapping with `title`, `author`, and `pages`")
    )]
    Load(#[from] StoryError),

    /// The session stopped before an ending.
    #[error(transparent)]
    #[diagnostic(code(cyoa::read))]
    Read(#[from] ReadError),
}
