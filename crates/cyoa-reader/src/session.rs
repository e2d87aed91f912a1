//! The read-loop.

use std::io::Write;

use cyoa_core::{Book, Page, PageNumber};
use tracing::debug;

use crate::config::ReadConfig;
use crate::error::{ReadError, ReadResult};
use crate::input::ChoiceSource;
use crate::navigate::{is_terminal, lookup, resolve_choice};
use crate::render;

/// Where a reading session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState<'b> {
    /// Showing a page that still has choices.
    Running(&'b Page),
    /// An ending was reached.
    Done,
}

impl<'b> ReadState<'b> {
    fn at(page: &'b Page) -> Self {
        if is_terminal(page) {
            Self::Done
        } else {
            Self::Running(page)
        }
    }
}

/// What happened during a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journey {
    /// Pages shown, in order, starting with the first page.
    pub pages: Vec<PageNumber>,
    /// Inputs that were rejected and re-prompted.
    pub rejected: usize,
}

/// A reader working through one book.
pub struct ReadSession<'b, I, W> {
    book: &'b Book,
    input: I,
    out: W,
    state: ReadState<'b>,
    journey: Journey,
}

impl<'b, I: ChoiceSource, W: Write> ReadSession<'b, I, W> {
    /// Open the book: print the banner and the first page.
    ///
    /// Fails with [`ReadError::StartPageMissing`] before writing anything if
    /// the configured first page does not exist.
    pub fn begin(book: &'b Book, config: &ReadConfig, input: I, mut out: W) -> ReadResult<Self> {
        let first = lookup(book, config.first_page)
            .map_err(|_| ReadError::StartPageMissing(config.first_page))?;

        render::banner(&mut out, book)?;
        render::page(&mut out, first)?;
        debug!(page = %first.number(), "opened book");

        Ok(Self {
            book,
            input,
            out,
            state: ReadState::at(first),
            journey: Journey {
                pages: vec![first.number()],
                rejected: 0,
            },
        })
    }

    /// The current state.
    pub fn state(&self) -> ReadState<'b> {
        self.state
    }

    /// The journey so far.
    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    /// Ask for one choice and turn to the page it names.
    ///
    /// Bad input is explained and asked for again until a page resolves.
    /// Does nothing once the session is done.
    pub fn step(&mut self) -> ReadResult<ReadState<'b>> {
        if self.state == ReadState::Done {
            return Ok(ReadState::Done);
        }

        let next = self.choose()?;
        render::page(&mut self.out, next)?;
        debug!(page = %next.number(), terminal = is_terminal(next), "turned page");

        self.journey.pages.push(next.number());
        self.state = ReadState::at(next);
        Ok(self.state)
    }

    /// Keep reading until an ending is reached.
    pub fn run(mut self) -> ReadResult<Journey> {
        while let ReadState::Running(_) = self.step()? {}
        self.out.flush()?;
        Ok(self.journey)
    }

    fn choose(&mut self) -> ReadResult<&'b Page> {
        loop {
            render::prompt(&mut self.out)?;
            let line = self.input.next_line()?.ok_or(ReadError::InputClosed)?;

            match resolve_choice(self.book, &line) {
                Ok(page) => return Ok(page),
                Err(err) => {
                    debug!(%err, "rejected choice");
                    self.journey.rejected += 1;
                    render::rejection(&mut self.out, &err)?;
                }
            }
        }
    }
}
