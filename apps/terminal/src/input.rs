//! # Prompt Helpers
//!
//! Reading and validating terminal input.
//!
//! ## Re-Prompt Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  read_integer_range("Loan duration", 1, 55)                         │
//! │                                                                     │
//! │  > abc        Please enter a whole number.                          │
//! │  > 90         Please enter a number between 1 and 55.               │
//! │  > 7          ──► Ok(7)                                             │
//! │                                                                     │
//! │  The screens never see malformed input; they receive a value or     │
//! │  an I/O error (closed stream), nothing in between.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Prompt`] is generic over a `BufRead`/`Write` pair so tests can script
//! a whole session with a `Cursor` and a `Vec<u8>`.

use std::io::{self, BufRead, Write};

/// A prompt/response channel over any reader/writer pair.
#[derive(Debug)]
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompt { reader, writer }
    }

    /// Tears the prompt down, yielding its writer. Tests use this to
    /// inspect everything the session printed.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Prints a line to the patron-facing side of the prompt.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()
    }

    /// Reads one line of input, without the trailing newline.
    ///
    /// EOF is an error: a vanished terminal must end the session rather
    /// than spin a re-prompt loop forever.
    pub fn read_string(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Reads a whole number, re-prompting until one is entered.
    pub fn read_integer(&mut self, prompt: &str) -> io::Result<i64> {
        loop {
            let raw = self.read_string(prompt)?;
            match raw.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Please enter a whole number.")?,
            }
        }
    }

    /// Reads a whole number within `min..=max`, re-prompting otherwise.
    pub fn read_integer_range(&mut self, prompt: &str, min: i64, max: i64) -> io::Result<i64> {
        loop {
            let value = self.read_integer(prompt)?;
            if (min..=max).contains(&value) {
                return Ok(value);
            }
            self.say(&format!("Please enter a number between {min} and {max}."))?;
        }
    }

    /// Reads a yes/no answer (`y`/`n`, case-insensitive), re-prompting
    /// until one is given.
    pub fn read_bool(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let raw = self.read_string(prompt)?;
            match raw.trim().to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// A prompt fed from a script, capturing output.
    fn scripted(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_string() {
        let mut prompt = scripted("FIT2107\n");
        assert_eq!(prompt.read_string("> ").unwrap(), "FIT2107");
    }

    #[test]
    fn test_read_string_strips_carriage_return() {
        let mut prompt = scripted("hello\r\n");
        assert_eq!(prompt.read_string("> ").unwrap(), "hello");
    }

    #[test]
    fn test_read_string_eof() {
        let mut prompt = scripted("");
        let err = prompt.read_string("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_integer() {
        let mut prompt = scripted("10\n");
        assert_eq!(prompt.read_integer("> ").unwrap(), 10);
    }

    #[test]
    fn test_read_integer_retries_on_junk() {
        let mut prompt = scripted("abc\n0.11\n10\n");
        assert_eq!(prompt.read_integer("> ").unwrap(), 10);

        let output = String::from_utf8(prompt.writer).unwrap();
        assert!(output.contains("Please enter a whole number."));
    }

    #[test]
    fn test_read_integer_range_retries_until_in_range() {
        let mut prompt = scripted("5\n25\n15\n");
        assert_eq!(prompt.read_integer_range("> ", 10, 20).unwrap(), 15);
    }

    #[test]
    fn test_read_bool() {
        assert!(scripted("y\n").read_bool("> ").unwrap());
        assert!(scripted("Y\n").read_bool("> ").unwrap());
        assert!(!scripted("n\n").read_bool("> ").unwrap());
        assert!(!scripted("N\n").read_bool("> ").unwrap());
    }

    #[test]
    fn test_read_bool_retries_on_junk() {
        let mut prompt = scripted("a\nb\nc\ny\n");
        assert!(prompt.read_bool("> ").unwrap());
    }
}
