//! Interactive console session
//!
//! Holds one elevator and the random source used for generated passengers,
//! and translates console commands into calls on the elevator.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::command::{Command, HELP};
use super::render::{render_status, render_step};
use crate::simulation::Elevator;

/// Default pause after each step, in milliseconds
pub const DEFAULT_STEP_DELAY_MS: u64 = 800;

/// Whether the session should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    elevator: Elevator,
    rng: StdRng,
    step_delay: Duration,
}

impl Session {
    pub fn new(elevator: Elevator, seed: u64, step_delay: Duration) -> Self {
        Self {
            elevator,
            rng: StdRng::seed_from_u64(seed),
            step_delay,
        }
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    /// Add random passengers before the first command
    pub fn seed_passengers(&mut self, count: usize) -> Result<usize> {
        self.elevator
            .submit_batch(count, &mut self.rng)
            .context("Failed to generate random passengers")
    }

    /// Run one step and print it, pausing afterwards if a delay is configured
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let report = self.elevator.step();
        write!(out, "{}", render_step(&report))?;
        writeln!(out)?;
        out.flush()?;
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
        Ok(())
    }

    pub fn write_status<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", render_status(&self.elevator.status()))?;
        Ok(())
    }

    /// Execute a single command, writing any output to `out`
    ///
    /// Validation failures are reported to `out` and do not end the session.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Add { start, destination } => {
                match self.elevator.submit(start, destination) {
                    Ok(_) => writeln!(out, "Added person {}→{}", start, destination)?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
            Command::Random { count } => match self.elevator.submit_batch(count, &mut self.rng) {
                Ok(added) => writeln!(out, "Added {} random passengers.", added)?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            Command::Step => self.step(out)?,
            Command::Auto { steps } => {
                for _ in 0..steps {
                    self.step(out)?;
                }
            }
            Command::Status => self.write_status(out)?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => {
                writeln!(out, "Exiting simulation.")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Read commands line by line until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{}", HELP)?;
        writeln!(out)?;

        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let line = match lines.next() {
                Some(line) => line.context("Failed to read command")?,
                None => break,
            };

            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if self.execute(command, out)? == Flow::Quit {
                        break;
                    }
                }
                Ok(None) => continue,
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
        Ok(())
    }
}
