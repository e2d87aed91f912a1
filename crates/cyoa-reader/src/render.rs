//! Console text for books, pages, and diagnostics.

use std::io::{self, Write};

use cyoa_core::{Book, Page};

use crate::error::NavError;

/// Line drawn between pages and above the choice list.
pub const SEPARATOR: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~";

/// Text shown when asking for the next page.
pub const PROMPT: &str = "Choose a page: ";

/// Title and author.
pub fn banner(out: &mut impl Write, book: &Book) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", book.title())?;
    writeln!(out)?;
    writeln!(out, "by")?;
    writeln!(out)?;
    writeln!(out, "{}", book.author())
}

/// A page followed by its choices, if it has any.
pub fn page(out: &mut impl Write, page: &Page) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;
    writeln!(out, "page {}", page.number())?;
    writeln!(out)?;
    writeln!(out, "{}", page.text())?;

    if page.choices().is_empty() {
        return Ok(());
    }

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;
    for choice in page.choices() {
        writeln!(out, "{choice}")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Ask for the next page. Flushes so the prompt shows before input blocks.
pub fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\n{PROMPT}")?;
    out.flush()
}

/// Explain why the last input was not accepted.
pub fn rejection(out: &mut impl Write, err: &NavError) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{err}")?;
    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")
}
