//! Line-based prompting and input validation.
//!
//! Invalid menu input never escapes this module: the prompter prints a
//! corrective message and asks again for as long as the player keeps typing.
//! Only a closed input stream or a console failure ends the loop.

use std::io::{BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

use crate::error::{StoryError, StoryResult};

const INDEX_PROMPT: &str = "\nChoose an option: ";
const NAME_PROMPT: &str = "What were you called in your original world? ";
const NAME_MISSING: &str = "A hero needs a name, even a borrowed one!";

/// Why a menu answer was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The answer is not an integer.
    NotANumber,
    /// The answer is an integer outside `1..=total`.
    OutOfRange,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber => write!(f, "Enter the number of the option you want."),
            Self::OutOfRange => write!(f, "Invalid option, try again."),
        }
    }
}

/// Validate a 1-based menu answer against a menu of `total` entries.
///
/// Returns the zero-based index on success.
pub fn parse_index(input: &str, total: usize) -> Result<usize, Rejection> {
    let n: i64 = input.trim().parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Rejection::OutOfRange,
        _ => Rejection::NotANumber,
    })?;
    match usize::try_from(n) {
        Ok(n) if (1..=total).contains(&n) => Ok(n - 1),
        _ => Err(Rejection::OutOfRange),
    }
}

/// Reads answers from `R` and writes story text and prompts to `W`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    buf: Vec<u8>,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given input and output.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            buf: Vec::new(),
            line: String::new(),
        }
    }

    /// Consume the prompter, returning its input and output.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Print `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> StoryResult<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one line of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than treated as a
    /// console failure, so a garbled answer is refused like any other.
    pub fn read_line(&mut self, prompt: &str) -> StoryResult<&str> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Err(StoryError::InputClosed);
        }
        self.line = String::from_utf8_lossy(&self.buf).into_owned();
        Ok(self.line.trim())
    }

    /// Ask for a 1-based menu choice until one in `1..=total` is given.
    ///
    /// Returns the zero-based index.
    pub fn ask_index(&mut self, total: usize) -> StoryResult<usize> {
        loop {
            let answer = self.read_line(INDEX_PROMPT)?;
            match parse_index(answer, total) {
                Ok(index) => return Ok(index),
                Err(rejection) => {
                    tracing::debug!(answer, %rejection, "menu answer refused");
                    self.say(&rejection.to_string())?;
                }
            }
        }
    }

    /// Ask for a non-empty name.
    pub fn ask_name(&mut self) -> StoryResult<String> {
        loop {
            let name = self.read_line(NAME_PROMPT)?;
            if !name.is_empty() {
                return Ok(name.to_string());
            }
            self.say(NAME_MISSING)?;
        }
    }
}
