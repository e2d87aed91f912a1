use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::choice::Choice;
use crate::error::InvalidPageNumber;

/// A positive page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "i64")]
pub struct PageNumber(u32);

impl PageNumber {
    /// The page every reading starts on unless configured otherwise.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw number. Returns `None` for zero.
    pub fn new(n: u32) -> Option<Self> {
        (n > 0).then_some(Self(n))
    }

    /// The raw number.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for PageNumber {
    type Error = InvalidPageNumber;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        u32::try_from(n)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidPageNumber(n.to_string()))
    }
}

impl FromStr for PageNumber {
    type Err = InvalidPageNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidPageNumber(s.to_string()))
    }
}

/// One numbered page of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    number: PageNumber,
    text: String,
    choices: Vec<Choice>,
}

impl Page {
    /// Create a page with no choices.
    pub fn new(number: PageNumber, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            choices: Vec::new(),
        }
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// The page number.
    pub fn number(&self) -> PageNumber {
        self.number
    }

    /// The narrative body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Choices offered at the bottom of the page, in file order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_page() {
        assert_eq!(PageNumber::new(0), None);
        assert_eq!(PageNumber::new(7).map(PageNumber::get), Some(7));
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("12".parse::<PageNumber>().unwrap().get(), 12);
        assert!("0".parse::<PageNumber>().is_err());
        assert!("-3".parse::<PageNumber>().is_err());
        assert!("three".parse::<PageNumber>().is_err());
        assert!("".parse::<PageNumber>().is_err());
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert!(PageNumber::try_from(-1).is_err());
        assert!(PageNumber::try_from(0).is_err());
        assert!(PageNumber::try_from(i64::from(u32::MAX) + 1).is_err());
        assert_eq!(PageNumber::try_from(42).unwrap().get(), 42);
    }

    #[test]
    fn page_builder() {
        let page = Page::new(PageNumber::FIRST, "It was a dark and stormy night.")
            .with_choice(Choice::PlainPageRef(PageNumber::new(2).unwrap()));

        assert_eq!(page.number(), PageNumber::FIRST);
        assert_eq!(page.text(), "It was a dark and stormy night.");
        assert_eq!(page.choices().len(), 1);
    }
}
