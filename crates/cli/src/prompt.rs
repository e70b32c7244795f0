//! Line and number input.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// What came back from a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Value(T),
    /// The line could not be parsed; carries the raw text.
    Invalid(String),
    /// Input is exhausted.
    Closed,
}

/// Reads answers from `input` after writing prompts to `output`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read one line with the trailing newline stripped.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD rather than an error, so a
    /// stray byte never ends the session.
    pub fn line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.line()
    }

    pub fn ask_parsed<T: FromStr>(&mut self, prompt: &str) -> io::Result<Reply<T>> {
        Ok(match self.ask(prompt)? {
            None => Reply::Closed,
            Some(raw) => match raw.trim().parse::<T>() {
                Ok(value) => Reply::Value(value),
                Err(_) => Reply::Invalid(raw),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_line_endings_but_keeps_inner_spaces() {
        let mut p = Prompter::new(Cursor::new("Blue Widget \r\nnext\n"), Vec::new());
        assert_eq!(p.ask("Name: ").unwrap().as_deref(), Some("Blue Widget "));
        assert_eq!(p.line().unwrap().as_deref(), Some("next"));
        assert_eq!(p.line().unwrap(), None);
        assert_eq!(p.output().as_slice(), b"Name: ");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let mut p = Prompter::new(Cursor::new(b"Caf\xe9\nnext\n".to_vec()), Vec::new());
        assert_eq!(p.line().unwrap().as_deref(), Some("Caf\u{FFFD}"));
        assert_eq!(p.line().unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn numbers_are_parsed_or_reported_invalid() {
        let mut p = Prompter::new(Cursor::new(" 12 \nten\n"), Vec::new());
        assert_eq!(p.ask_parsed::<i64>("Qty: ").unwrap(), Reply::Value(12));
        assert_eq!(
            p.ask_parsed::<i64>("Qty: ").unwrap(),
            Reply::Invalid("ten".to_string())
        );
        assert_eq!(p.ask_parsed::<i64>("Qty: ").unwrap(), Reply::Closed);
    }
}
