//! Where the reader's choices come from.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A blocking source of raw reader input, one line per prompt.
pub trait ChoiceSource {
    /// Pull the next line without its line ending.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Lines read from any buffered reader, typically locked stdin.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ChoiceSource for LineInput<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// A fixed script of answers, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Create a script that answers each prompt with the next line.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl ChoiceSource for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

impl<T: ChoiceSource + ?Sized> ChoiceSource for &mut T {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}
