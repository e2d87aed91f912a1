use std::fs;

use tracing::{debug, warn};

use crate::book::Book;
use crate::config::StoryConfig;
use crate::error::{StoryError, StoryResult};

/// Read and parse the story named by `config`.
///
/// The file is read in full and closed before parsing. Duplicate page
/// numbers are logged and tolerated unless `config.strict` is set, in which
/// case the first duplicated number is reported as
/// [`StoryError::DuplicatePage`].
pub fn load(config: &StoryConfig) -> StoryResult<Book> {
    let source = fs::read_to_string(&config.path).map_err(|source| StoryError::Read {
        path: config.path.clone(),
        source,
    })?;

    let book = Book::from_yaml_str(&source)?;

    let duplicates = book.duplicate_page_numbers();
    if let Some(&first) = duplicates.first() {
        if config.strict {
            return Err(StoryError::DuplicatePage(first));
        }
        warn!(
            path = %config.path.display(),
            pages = ?duplicates.iter().map(|n| n.get()).collect::<Vec<_>>(),
            "duplicate page numbers; the first page with each number wins"
        );
    }

    debug!(
        path = %config.path.display(),
        title = book.title(),
        pages = book.len(),
        "loaded story"
    );
    Ok(book)
}
