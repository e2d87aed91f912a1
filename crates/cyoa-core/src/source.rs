//! The raw YAML shape of a story file and its conversion into a [`Book`].

use serde::Deserialize;
use serde_yaml::Value;

use crate::book::Book;
use crate::choice::Choice;
use crate::error::{InvalidPageNumber, StoryError, StoryResult};
use crate::page::{Page, PageNumber};

#[derive(Debug, Deserialize)]
struct RawBook {
    title: String,
    author: String,
    pages: Vec<RawPage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage {
    page_number: PageNumber,
    text: String,
    #[serde(default)]
    choices: Vec<Value>,
}

/// The mapping spelling of a choice: `{pageNumber: 3, text: "..."}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLabeled {
    page_number: PageNumber,
    text: String,
}

/// Resolve one entry of a page's `choices` list.
///
/// A choice may be a page number, free text, or a labeled mapping. Errors
/// name the page and echo the offending entry.
fn resolve_choice(page: PageNumber, value: Value) -> StoryResult<Choice> {
    let bad = |reason: String| {
        StoryError::Format(format!("page {page}: choice `{}`: {reason}", show(&value)))
    };

    match &value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| InvalidPageNumber(n.to_string()))
            .and_then(PageNumber::try_from)
            .map(Choice::PlainPageRef)
            .map_err(|e| bad(e.to_string())),
        Value::String(text) => Ok(Choice::from_text(text.as_str())),
        Value::Mapping(_) => serde_yaml::from_value::<RawLabeled>(value.clone())
            .map(|raw| Choice::labeled(raw.page_number, raw.text))
            .map_err(|e| bad(e.to_string())),
        _ => Err(bad(
            "expected a page number, text, or a mapping with `pageNumber` and `text`".to_string(),
        )),
    }
}

/// Render a YAML value on one line for error messages.
fn show(value: &Value) -> String {
    match serde_yaml::to_string(value) {
        Ok(yaml) => yaml.trim_end().replace('\n', ", "),
        Err(_) => format!("{value:?}"),
    }
}

impl TryFrom<RawPage> for Page {
    type Error = StoryError;

    fn try_from(raw: RawPage) -> StoryResult<Self> {
        let number = raw.page_number;
        raw.choices
            .into_iter()
            .try_fold(Page::new(number, raw.text), |page, choice| {
                Ok(page.with_choice(resolve_choice(number, choice)?))
            })
    }
}

impl TryFrom<RawBook> for Book {
    type Error = StoryError;

    fn try_from(raw: RawBook) -> StoryResult<Self> {
        raw.pages
            .into_iter()
            .try_fold(Book::new(raw.title, raw.author), |book, page| {
                Ok(book.with_page(Page::try_from(page)?))
            })
    }
}

impl Book {
    /// Parse a book from YAML text.
    pub fn from_yaml_str(source: &str) -> StoryResult<Self> {
        let raw: RawBook = serde_yaml::from_str(source)?;
        raw.try_into()
    }

    /// Build a book from an already parsed YAML value.
    pub fn from_value(value: serde_yaml::Value) -> StoryResult<Self> {
        let raw: RawBook = serde_yaml::from_value(value)?;
        raw.try_into()
    }
}
