use std::borrow::Cow;
use std::fmt;

use crate::page::PageNumber;

/// A way out of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// A bare reference to another page.
    PlainPageRef(PageNumber),
    /// A reference with text written by the author.
    Labeled {
        /// The page this choice leads to.
        target: PageNumber,
        /// The text shown to the reader.
        text: String,
    },
    /// Display text that names no page; the reader types a number instead.
    Text(String),
}

impl Choice {
    /// Create a labeled choice.
    pub fn labeled(target: PageNumber, text: impl Into<String>) -> Self {
        Self::Labeled {
            target,
            text: text.into(),
        }
    }

    /// Build a choice from free text that names its target page, as in
    /// `"If you open the door, turn to page 12."`.
    ///
    /// The last number in the text is taken as the target. Text with no
    /// usable page number is kept as a [`Choice::Text`].
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        match last_page_number(&text) {
            Some(target) => Self::Labeled { target, text },
            None => Self::Text(text),
        }
    }

    /// The page this choice leads to, if it names one.
    pub fn target(&self) -> Option<PageNumber> {
        match self {
            Self::PlainPageRef(target) | Self::Labeled { target, .. } => Some(*target),
            Self::Text(_) => None,
        }
    }

    /// The text shown to the reader.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            Self::PlainPageRef(target) => Cow::Owned(format!("Turn to page {target}")),
            Self::Labeled { text, .. } | Self::Text(text) => Cow::Borrowed(text),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

fn last_page_number(text: &str) -> Option<PageNumber> {
    text.split(|c: char| !c.is_ascii_digit())
        .rfind(|digits| !digits.is_empty())
        .and_then(|digits| digits.parse().ok())
}
