//! Page lookup and choice resolution.

use cyoa_core::{Book, Page, PageNumber};

use crate::error::{NavError, NavResult};

/// Find the page numbered `number`.
///
/// Pages are scanned in file order and the first match wins, so a book with
/// duplicate numbers always resolves to the earlier page.
pub fn lookup(book: &Book, number: PageNumber) -> NavResult<&Page> {
    book.pages()
        .iter()
        .find(|page| page.number() == number)
        .ok_or(NavError::PageNotFound(number.get().into()))
}

/// Whether the story ends on this page.
pub fn is_terminal(page: &Page) -> bool {
    page.choices().is_empty()
}

/// Turn a line typed by the reader into the page it names.
///
/// Anything that does not parse as an integer is [`NavError::InvalidInput`],
/// carrying the line as typed minus its line ending. Every integer goes on to
/// [`lookup`], so `0` or `-3` is simply a page the book does not have. The
/// number is not checked against the choices on the current page: any page
/// in the book may be reached.
pub fn resolve_choice<'b>(book: &'b Book, raw: &str) -> NavResult<&'b Page> {
    let line = raw.trim_end_matches(['\r', '\n']);
    let number = line
        .trim()
        .parse::<i64>()
        .map_err(|_| NavError::InvalidInput(line.to_string()))?;
    let page = PageNumber::try_from(number).map_err(|_| NavError::PageNotFound(number))?;
    lookup(book, page)
}
