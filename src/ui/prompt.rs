//! Line-oriented prompting over any reader/writer pair.
//!
//! Every question returns `Ok(None)` once the input is exhausted so that
//! callers can end the session instead of spinning on an empty stdin.

use crate::errors::AppResult;
use std::io::{BufRead, Write};

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

    /// Ask once; the answer comes back trimmed and lower-cased.
    pub fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        write!(self.output, "{question}\n> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_lowercase()))
    }

    /// Ask until `parse` accepts the answer, printing `invalid` after each miss.
    pub fn choose<T, F>(&mut self, question: &str, invalid: &str, parse: F) -> AppResult<Option<T>>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            if let Some(value) = parse(&answer) {
                return Ok(Some(value));
            }
            writeln!(self.output, "{invalid}\n")?;
        }
    }

    /// yes/y → true, no/n → false, anything else (including blank) → `default`.
    pub fn confirm(&mut self, question: &str, default: bool) -> AppResult<Option<bool>> {
        Ok(self.ask(question)?.map(|answer| match answer.as_str() {
            "yes" | "y" => true,
            "no" | "n" => false,
            _ => default,
        }))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
