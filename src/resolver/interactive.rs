//! Operator-driven outcome policy.
//!
//! Two questions per cycle:
//! 1. Was the video watched in full? (`y`/`n`)
//! 2. If so, the final action (`share`/`reject`)
//!
//! Answering `n` forces a reject without asking the second question. Any
//! other input is answered with the same prompt again.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::OutcomeResolver;
use crate::domain::CycleOutcome;
use crate::error::{Result, RewardError};

pub const WATCHED_PROMPT: &str = "Did you watch the full video? (y/n): ";
pub const ACTION_PROMPT: &str = "Final action? (share/reject): ";

/// Asks the operator for every outcome.
#[derive(Debug)]
pub struct InteractiveResolver<I, O> {
    input: I,
    output: O,
}

impl InteractiveResolver<StdinLock<'static>, Stdout> {
    /// Resolver bound to the process terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> InteractiveResolver<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Prompt sink, for inspecting what the operator was shown
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Prompt until `parse` accepts the answer.
    fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            // Raw bytes: undecodable input is just another invalid answer
            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                return Err(RewardError::InputClosed);
            }
            let line = String::from_utf8_lossy(&raw);

            match parse(&line) {
                Some(answer) => return Ok(answer),
                None => log::debug!("Rejected operator input {:?}", line.trim()),
            }
        }
    }
}

fn parse_watched(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

fn parse_action(answer: &str) -> Option<CycleOutcome> {
    answer.parse().ok()
}

impl<I: BufRead, O: Write> OutcomeResolver for InteractiveResolver<I, O> {
    fn name(&self) -> &'static str {
        "interactive"
    }

    fn resolve(&mut self, cycle: u32) -> Result<CycleOutcome> {
        let watched = self.ask(WATCHED_PROMPT, parse_watched)?;
        if !watched {
            log::info!("Cycle {}: video not watched in full, forcing reject", cycle);
            return Ok(CycleOutcome::Reject);
        }
        self.ask(ACTION_PROMPT, parse_action)
    }
}
