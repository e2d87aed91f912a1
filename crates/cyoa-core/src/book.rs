use std::collections::HashSet;

use crate::page::{Page, PageNumber};

/// A complete story: title, author, and pages in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    pages: Vec<Page>,
}

impl Book {
    /// Create a book with no pages.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages: Vec::new(),
        }
    }

    /// Append a page.
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    /// The book title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The author's name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// All pages in file order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages, duplicates included.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the book has no pages at all.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page numbers used by more than one page, sorted ascending.
    pub fn duplicate_page_numbers(&self) -> Vec<PageNumber> {
        let mut seen = HashSet::new();
        let mut duplicates: Vec<_> = self
            .pages
            .iter()
            .map(Page::number)
            .filter(|n| !seen.insert(*n))
            .collect();
        duplicates.sort_unstable();
        duplicates.dedup();
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32) -> Page {
        Page::new(PageNumber::new(n).unwrap(), format!("page {n}"))
    }

    #[test]
    fn book_builder() {
        let book = Book::new("The Cave of Time", "Edward Packard")
            .with_page(page(1))
            .with_page(page(2));

        assert_eq!(book.title(), "The Cave of Time");
        assert_eq!(book.author(), "Edward Packard");
        assert_eq!(book.len(), 2);
        assert!(!book.is_empty());
    }

    #[test]
    fn no_duplicates() {
        let book = Book::new("t", "a").with_page(page(1)).with_page(page(2));
        assert!(book.duplicate_page_numbers().is_empty());
    }

    #[test]
    fn duplicates_reported_once_each() {
        let book = Book::new("t", "a")
            .with_page(page(3))
            .with_page(page(1))
            .with_page(page(3))
            .with_page(page(1))
            .with_page(page(3));

        let dups: Vec<u32> = book
            .duplicate_page_numbers()
            .into_iter()
            .map(PageNumber::get)
            .collect();
        assert_eq!(dups, vec![1, 3]);
    }
}
