use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use log::debug;

use crate::data::error::TableError;

// ---------------------------------------------------------------------------
// Console – line-oriented prompt/answer channel
// ---------------------------------------------------------------------------

/// Prompts go to `output`, answers come from `input`, one line each.
/// Generic so the collector can be driven from a `Cursor` in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{message}").context("writing to console")
    }

    /// Print `prompt` (no newline) and read one answer line, without its
    /// line terminator. End of input aborts the run.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}").context("writing prompt")?;
        self.output.flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading answer")?;
        if read == 0 {
            bail!("input ended while waiting for: {}", prompt.trim());
        }
        let answer = line.trim_end_matches(&['\n', '\r'][..]).to_string();
        debug!("{} -> {answer:?}", prompt.trim());
        Ok(answer)
    }

    /// Ask until `parse` accepts the answer, printing each rejection.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, TableError>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(err)?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

// ---------------------------------------------------------------------------
// Answer parsers
// ---------------------------------------------------------------------------

/// Parse one 1-based column number against `columns` and return the 0-based
/// index.
pub fn parse_column_index(answer: &str, columns: usize) -> Result<usize, TableError> {
    let token = answer.trim();
    match token.parse::<usize>() {
        Ok(n) if (1..=columns).contains(&n) => Ok(n - 1),
        _ => Err(TableError::InvalidUserInput(format!(
            "'{token}' is not a column number between 1 and {columns}."
        ))),
    }
}

/// Parse a comma-separated list of 1-based column numbers, keeping the
/// order entered. A blank answer is an empty list.
pub fn parse_column_indices(answer: &str, columns: usize) -> Result<Vec<usize>, TableError> {
    if answer.trim().is_empty() {
        return Ok(Vec::new());
    }
    answer
        .split(',')
        .map(|token| parse_column_index(token, columns))
        .collect()
}

/// Comma-separated values, each trimmed.
pub fn parse_value_list(answer: &str) -> Vec<String> {
    answer
        .trim()
        .split(',')
        .map(|value| value.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn index_parsing() {
        assert_eq!(parse_column_index(" 2 ", 3).unwrap(), 1);
        assert!(parse_column_index("0", 3).is_err());
        assert!(parse_column_index("4", 3).is_err());
        assert!(matches!(
            parse_column_index("two", 3),
            Err(TableError::InvalidUserInput(_))
        ));
    }

    #[test]
    fn index_list_parsing() {
        assert_eq!(parse_column_indices("3, 1", 3).unwrap(), vec![2, 0]);
        assert_eq!(parse_column_indices("   ", 3).unwrap(), Vec::<usize>::new());
        assert!(parse_column_indices("1,,2", 3).is_err());
        assert!(parse_column_indices("1,x", 3).is_err());
    }

    #[test]
    fn value_list_is_trimmed() {
        assert_eq!(parse_value_list(" NYC , LA"), vec!["NYC", "LA"]);
        assert_eq!(parse_value_list(""), vec![""]);
    }

    #[test]
    fn ask_until_reprompts() {
        let mut console = Console::new(Cursor::new("x\n5\n2\n"), Vec::new());
        let idx = console
            .ask_until("Column: ", |a| parse_column_index(a, 3))
            .unwrap();
        assert_eq!(idx, 1);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out.matches("Column: ").count(), 3);
        assert!(out.contains("'x' is not a column number"));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert!(console.ask("Name: ").is_err());
    }

    #[test]
    fn crlf_is_stripped() {
        let mut console = Console::new(Cursor::new("data.csv\r\n"), Vec::new());
        assert_eq!(console.ask("File: ").unwrap(), "data.csv");
    }
}
