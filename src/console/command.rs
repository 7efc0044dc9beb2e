//! Text commands accepted by the interactive console

use thiserror::Error;

use crate::simulation::Floor;

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  add <start> <dest>   - add a person waiting
  random <count>       - add random passengers
  step                 - move elevator one step (SCAN)
  auto <steps>         - auto run N steps
  status               - show current status
  help                 - show this list
  quit                 - exit simulation";

/// A parsed console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add { start: Floor, destination: Floor },
    Random { count: usize },
    Step,
    Auto { steps: usize },
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown command. Please try: add, random, step, auto, status, quit")]
    Unknown(String),
}

impl Command {
    /// Parse one line of input
    /// Returns Ok(None) for blank lines
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut parts = line.split_whitespace();
        let keyword = match parts.next() {
            Some(k) => k.to_lowercase(),
            None => return Ok(None),
        };
        let args: Vec<&str> = parts.collect();

        let command = match keyword.as_str() {
            "add" => {
                const USAGE: &str = "add <start> <dest>";
                let (start, destination) = match args.as_slice() {
                    [start, destination, ..] => (*start, *destination),
                    _ => return Err(CommandError::Usage(USAGE)),
                };
                Command::Add {
                    start: parse_number(start)?,
                    destination: parse_number(destination)?,
                }
            }
            "random" => Command::Random {
                count: parse_number(args.first().ok_or(CommandError::Usage("random <count>"))?)?,
            },
            "step" => Command::Step,
            "auto" => Command::Auto {
                steps: parse_number(args.first().ok_or(CommandError::Usage("auto <steps>"))?)?,
            },
            "status" => Command::Status,
            "help" => Command::Help,
            "quit" => Command::Quit,
            _ => return Err(CommandError::Unknown(keyword)),
        };
        Ok(Some(command))
    }
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T, CommandError> {
    text.parse()
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))
}
