//! Line sources consumed by the parser
//!
//! Acquiring the script (file, network, worker message) is the caller's
//! business; the parser only needs decoded text one line at a time.

use std::io::BufRead;

use crate::utils::Result;

/// Source of decoded script lines
pub trait Stream {
    /// Next line without its terminator, or `None` at the end
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`](crate::CoreError::Io) when the underlying
    /// source fails.
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// Lines of an in-memory string
#[derive(Debug, Clone)]
pub struct StringStream<'a> {
    /// Remaining lines
    lines: core::str::Lines<'a>,
}

impl<'a> StringStream<'a> {
    /// Stream over `text`
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { lines: text.lines() }
    }
}

impl Stream for StringStream<'_> {
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next().map(ToString::to_string))
    }
}

/// Lines of a buffered reader
#[derive(Debug)]
pub struct ReaderStream<R> {
    /// Source
    reader: R,
}

impl<R: BufRead> ReaderStream<R> {
    /// Stream over `reader`
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Stream for ReaderStream<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
