//! Reading boards and menu answers typed by the user.

use std::convert::TryFrom;
use std::io::{BufRead, Write};

use lazy_static::lazy_static;
use puzzle::{Layout, Strategy};
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[\s,]+").unwrap();
    static ref BOARD: Regex = Regex::new(r"^[0-8]{9}$").unwrap();
    static ref ROW: Regex = Regex::new(r"^[0-8]{3}$").unwrap();
    static ref CHOICE: Regex = Regex::new(r"(?i)^[a-d]$").unwrap();
    static ref ANSWER: Regex = Regex::new(r"(?i)^(y|n|yes|no)$").unwrap();
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Expected exactly nine digits 0-8, got {0:?}")]
    MalformedBoard(String),

    #[error("Expected exactly three digits 0-8 with no spaces, got {0:?}")]
    MalformedRow(String),

    #[error("The value {0} has already been used")]
    Duplicate(u8),

    #[error("Enter a, b, c or d, not {0:?}")]
    Choice(String),

    #[error("Enter yes or no (y/n), not {0:?}")]
    Answer(String),

    #[error("Input ended before the puzzle was complete")]
    EndOfInput,

    #[error("Unable to read input")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = ::std::result::Result<T, InputError>;

fn digits(text: &str) -> Vec<u8> {
    text.bytes().map(|b| b - b'0').collect()
}

/// Mark each value as used, failing on the first repeat.
fn claim(values: &[u8], used: &mut [bool; 9]) -> Result<()> {
    for value in values {
        let slot = &mut used[*value as usize];
        if *slot {
            return Err(InputError::Duplicate(*value));
        }
        *slot = true;
    }
    Ok(())
}

/// Parse a whole board, e.g. `123405786` or `1,2,3 4,0,5 7,8,6`.
pub fn parse_board(text: &str) -> Result<Layout> {
    let compact = SEPARATORS.replace_all(text.trim(), "");
    if !BOARD.is_match(&compact) {
        return Err(InputError::MalformedBoard(text.to_string()));
    }

    let values = digits(&compact);
    claim(&values, &mut [false; 9])?;
    Layout::try_from(values.as_slice()).map_err(|_| InputError::MalformedBoard(text.to_string()))
}

/// Parse one row of three digits, none of which may already be used.
pub fn parse_row(text: &str, used: &mut [bool; 9]) -> Result<[u8; 3]> {
    let text = text.trim();
    if !ROW.is_match(text) {
        return Err(InputError::MalformedRow(text.to_string()));
    }

    let values = digits(text);
    let mut trial = *used;
    claim(&values, &mut trial)?;
    *used = trial;
    Ok([values[0], values[1], values[2]])
}

/// Parse a strategy menu letter.
pub fn parse_choice(text: &str) -> Result<Strategy> {
    let text = text.trim();
    if !CHOICE.is_match(text) {
        return Err(InputError::Choice(text.to_string()));
    }
    text.parse()
        .map_err(|_| InputError::Choice(text.to_string()))
}

/// Parse a yes/no answer.
pub fn parse_answer(text: &str) -> Result<bool> {
    let text = text.trim();
    if !ANSWER.is_match(text) {
        return Err(InputError::Answer(text.to_string()));
    }
    Ok(text.to_lowercase().starts_with('y'))
}

/// Asks the user for boards and choices, repeating each
/// question until the answer is valid.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompt<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput);
        }
        Ok(line)
    }

    /// Ask until `parse` accepts an answer, echoing each rejection.
    fn ask<T, F>(&mut self, question: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> Result<T>,
    {
        loop {
            write!(self.output, "{}", question)?;
            let line = self.line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Read a board row by row.
    pub fn board(&mut self, label: &str) -> Result<Layout> {
        writeln!(self.output, "Please enter the {} state.", label)?;
        writeln!(
            self.output,
            "Enter three digits per row with no spacing, using 0 for the blank."
        )?;

        let mut used = [false; 9];
        let mut values = Vec::with_capacity(9);
        for row in 1..=3 {
            let question = format!("Row {}: ", row);
            let digits = self.ask(&question, |line| parse_row(line, &mut used))?;
            values.extend_from_slice(&digits);
        }

        let layout = Layout::try_from(values.as_slice())
            .map_err(|_| InputError::MalformedBoard(format!("{:?}", values)))?;
        writeln!(self.output, "{} state:\n{}\n", label, layout)?;
        Ok(layout)
    }

    /// Offer the strategy menu.
    pub fn strategy(&mut self) -> Result<Strategy> {
        writeln!(self.output, "Select a search method:")?;
        for strategy in Strategy::all() {
            writeln!(self.output, "    ({}) {}", strategy.letter(), strategy)?;
        }
        writeln!(
            self.output,
            "Harder puzzles may take a while, especially for breadth-first search."
        )?;
        self.ask("> ", parse_choice)
    }

    pub fn play_again(&mut self) -> Result<bool> {
        self.ask("Do you want to play again (y/n)? ", parse_answer)
    }
}
