//! Core types for cyoa: the book, its pages, and the choices linking them.
//!
//! A [`Book`] is built once from a YAML story file and never changes
//! afterwards. Both choice syntaxes a story file may use are folded into the
//! single [`Choice`] enum at load time, so readers of the model never see
//! which one the author picked.

/// Books and their page collections.
pub mod book;
/// Choices offered at the bottom of a page.
pub mod choice;
/// Loader configuration.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Reading story files from disk.
pub mod loader;
/// Pages and page numbers.
pub mod page;
/// The raw YAML shape of a story file.
mod source;

/// Re-export the book model.
pub use book::Book;
/// Re-export choice types.
pub use choice::Choice;
/// Re-export loader configuration.
pub use config::StoryConfig;
/// Re-export error types.
pub use error::{InvalidPageNumber, StoryError, StoryResult};
/// Re-export the file loader.
pub use loader::load;
/// Re-export page types.
pub use page::{Page, PageNumber};
