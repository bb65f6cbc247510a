//! # Line Readers
//!
//! Where [`crate::utils::Terminal`] gets its raw lines from. The orchestrator
//! only talks to the [`LineReader`] trait, so the console can be swapped for
//! any other source:
//!
//! - [`ConsoleReader`] - the real console. Plain lines come from stdin, hidden
//!   lines from the terminal with echo turned off (`hidden-input` feature), or
//!   from stdin like plain lines when stdin is not a terminal.
//! - [`StreamReader`] - any [`BufRead`], e.g. a `Cursor` over canned text.
//! - [`ScriptedReader`] - a queue of lines, handy in tests.
//!
//! Every reader returns the line without its trailing newline, or `None` once
//! the source is exhausted. Bytes that are not valid UTF-8 are replaced with
//! `U+FFFD`, so a garbled line is rejected by conversion instead of ending the loop.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal};

/// Source of raw input lines.
pub trait LineReader {
    /// Blocks until one full line is available.
    ///
    /// `hidden` asks the reader not to echo what is typed. Returns `Ok(None)`
    /// at end of input.
    fn read_line(&mut self, hidden: bool) -> io::Result<Option<String>>;
}

impl<R: LineReader + ?Sized> LineReader for &mut R {
    fn read_line(&mut self, hidden: bool) -> io::Result<Option<String>> {
        (**self).read_line(hidden)
    }
}

impl<R: LineReader + ?Sized> LineReader for Box<R> {
    fn read_line(&mut self, hidden: bool) -> io::Result<Option<String>> {
        (**self).read_line(hidden)
    }
}

/// Removes one trailing `\n` or `\r\n`.
pub(crate) fn strip_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Reads one line from a buffered source, `None` when nothing is left.
fn read_buffered<B: BufRead + ?Sized>(source: &mut B) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();

    match source.read_until(b'\n', &mut bytes)? {
        0 => Ok(None),
        _ => {
            let line = String::from_utf8_lossy(&bytes).into_owned();
            Ok(Some(strip_newline(line)))
        }
    }
}

/// The process console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReader;

impl ConsoleReader {
    pub fn new() -> Self {
        Self
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hidden-input")] {
        fn read_hidden() -> io::Result<Option<String>> {
            match rpassword::read_password() {
                Ok(secret) => Ok(Some(secret)),
                // Closed terminal: the line never got its newline.
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
                Err(e) => Err(e),
            }
        }
    } else {
        fn read_hidden() -> io::Result<Option<String>> {
            tracing::warn!("built without `hidden-input`, secret input will be echoed");
            read_buffered(&mut io::stdin().lock())
        }
    }
}

impl LineReader for ConsoleReader {
    fn read_line(&mut self, hidden: bool) -> io::Result<Option<String>> {
        // Piped stdin has no echo to suppress and no terminal to read from.
        if hidden && io::stdin().is_terminal() {
            read_hidden()
        } else {
            read_buffered(&mut io::stdin().lock())
        }
    }
}

/// Reads lines from any [`BufRead`]. Nothing is echoed, so `hidden` has no effect.
///
/// ```rust
/// use std::io::Cursor;
/// use askline::utils::{LineReader, StreamReader};
///
/// let mut reader = StreamReader::new(Cursor::new("first\r\nsecond"));
/// assert_eq!(reader.read_line(false).unwrap().as_deref(), Some("first"));
/// assert_eq!(reader.read_line(true).unwrap().as_deref(), Some("second"));
/// assert_eq!(reader.read_line(false).unwrap(), None);
/// ```
#[derive(Debug)]
pub struct StreamReader<B> {
    source: B,
}

impl<B: BufRead> StreamReader<B> {
    pub fn new(source: B) -> Self {
        Self { source }
    }

    pub fn into_inner(self) -> B {
        self.source
    }
}

impl<B: BufRead> LineReader for StreamReader<B> {
    fn read_line(&mut self, _hidden: bool) -> io::Result<Option<String>> {
        read_buffered(&mut self.source)
    }
}

/// Hands out a fixed list of lines, then reports end of input.
///
/// Every request is recorded with its `hidden` flag, so tests can check how
/// many times the loop asked and in which mode.
#[derive(Debug, Default, Clone)]
pub struct ScriptedReader {
    lines: VecDeque<String>,
    requests: Vec<bool>,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            requests: Vec::new(),
        }
    }

    /// `hidden` flag of every read request so far, oldest first.
    pub fn requests(&self) -> &[bool] {
        &self.requests
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, hidden: bool) -> io::Result<Option<String>> {
        self.requests.push(hidden);
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_strip_newline() {
        assert_eq!(strip_newline("abc\n".to_string()), "abc");
        assert_eq!(strip_newline("abc\r\n".to_string()), "abc");
        assert_eq!(strip_newline("abc".to_string()), "abc");
        assert_eq!(strip_newline("abc\n\n".to_string()), "abc\n");
        assert_eq!(strip_newline("abc\r".to_string()), "abc\r");
        assert_eq!(strip_newline("\n".to_string()), "");
    }

    #[test]
    fn test_stream_reader_keeps_blank_lines() {
        let mut reader = StreamReader::new(Cursor::new("\n  \nlast\n"));
        assert_eq!(reader.read_line(false).unwrap(), Some(String::new()));
        assert_eq!(reader.read_line(false).unwrap(), Some("  ".to_string()));
        assert_eq!(reader.read_line(false).unwrap(), Some("last".to_string()));
        assert_eq!(reader.read_line(false).unwrap(), None);
    }

    #[test]
    fn test_stream_reader_replaces_invalid_utf8() {
        let mut reader = StreamReader::new(Cursor::new(&b"caf\xe9\nok\n"[..]));
        assert_eq!(reader.read_line(false).unwrap(), Some("caf\u{FFFD}".to_string()));
        assert_eq!(reader.read_line(false).unwrap(), Some("ok".to_string()));
        assert_eq!(reader.read_line(false).unwrap(), None);
    }

    #[test]
    fn test_stream_reader_empty_source() {
        let mut reader = StreamReader::new(Cursor::new(""));
        assert_eq!(reader.read_line(true).unwrap(), None);
    }

    #[test]
    fn test_scripted_reader_records_requests() {
        let mut reader = ScriptedReader::new(["a", "b"]);
        assert_eq!(reader.read_line(false).unwrap().as_deref(), Some("a"));
        assert_eq!(reader.read_line(true).unwrap().as_deref(), Some("b"));
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.read_line(false).unwrap(), None);
        assert_eq!(reader.requests(), &[false, true, false]);
    }

    fn first_line<R: LineReader>(mut reader: R) -> Option<String> {
        reader.read_line(false).unwrap()
    }

    #[test]
    fn test_reader_through_mut_ref_and_box() {
        let mut scripted = ScriptedReader::new(["x"]);
        assert_eq!(first_line(&mut scripted).as_deref(), Some("x"));
        assert_eq!(scripted.requests().len(), 1);

        let boxed: Box<dyn LineReader> = Box::new(ScriptedReader::new(["y"]));
        assert_eq!(first_line(boxed).as_deref(), Some("y"));
    }
}
