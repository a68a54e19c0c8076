// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Line-oriented prompting with validation and unbounded retry.

use std::io::{BufRead, Write};

use crate::error::{AppError, Result};

/// Reads answers from `input` and writes prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for everything that is not a prompt.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and return the trimmed answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt).map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer).map_err(io_error)?;
        if read == 0 {
            return Err(AppError::Internal(anyhow::anyhow!("input closed")));
        }
        Ok(answer.trim().to_string())
    }

    /// Ask until `parse` accepts the answer, printing `invalid` after each rejection.
    pub fn ask_until<T, E>(
        &mut self,
        prompt: &str,
        invalid: &str,
        parse: impl Fn(&str) -> std::result::Result<T, E>,
    ) -> Result<T>
    where
        E: std::fmt::Display,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(answer = %answer, error = %e, "Rejected input");
                    writeln!(self.output, "{}", invalid).map_err(io_error)?;
                }
            }
        }
    }

    /// Ask a yes/no question; anything else is asked again.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.ask_until(prompt, "Please answer yes or no.", parse_yes_no)
    }
}

fn parse_yes_no(answer: &str) -> std::result::Result<bool, String> {
    match answer.to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        other => Err(format!("'{}' is not yes or no", other)),
    }
}

pub(crate) fn io_error(err: std::io::Error) -> AppError {
    AppError::Internal(err.into())
}
