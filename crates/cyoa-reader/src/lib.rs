//! Page navigation for cyoa.
//!
//! [`lookup`], [`is_terminal`] and [`resolve_choice`] are the whole engine.
//! [`ReadSession`] drives them in a loop: show a page, stop if it has no
//! choices, otherwise pull a line from a [`ChoiceSource`] and move on.

/// Read-loop configuration.
pub mod config;
/// Error types for navigation and reading.
pub mod error;
/// Where the reader's choices come from.
pub mod input;
/// Page lookup and choice resolution.
pub mod navigate;
/// Console text for books, pages, and diagnostics.
pub mod render;
/// The read-loop.
pub mod session;

pub use config::ReadConfig;
pub use error::{NavError, NavResult, ReadError, ReadResult};
pub use input::{ChoiceSource, LineInput, ScriptedInput};
pub use navigate::{is_terminal, lookup, resolve_choice};
pub use session::{Journey, ReadSession, ReadState};
