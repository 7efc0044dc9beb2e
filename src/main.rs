use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use rand::Rng;

use elevator_sim::console::{Session, DEFAULT_STEP_DELAY_MS};
use elevator_sim::simulation::{Elevator, Floor};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Single elevator simulation using the SCAN algorithm")]
struct Cli {
    /// Number of floors in the building (prompted for when omitted)
    #[arg(long)]
    floors: Option<Floor>,

    /// Seed for randomly generated passengers
    #[arg(long)]
    seed: Option<u64>,

    /// Pause after each step in milliseconds
    #[arg(long, default_value_t = DEFAULT_STEP_DELAY_MS)]
    delay_ms: u64,

    /// Random passengers to add before the first step
    #[arg(long, default_value = "0")]
    random: usize,

    /// Run this many steps in headless mode instead of reading commands
    #[arg(long)]
    steps: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,elevator_sim=info"),
    )
    .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "ELEVATOR SIMULATION (SCAN ALGO)")?;
    let floors = match cli.floors {
        Some(floors) => floors,
        None => prompt_floors(&mut input, &mut out)?,
    };
    let elevator = Elevator::new(floors).context("Cannot build the elevator")?;

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!("Using seed {}", seed);

    let mut session = Session::new(elevator, seed, Duration::from_millis(cli.delay_ms));
    if cli.random > 0 {
        let added = session.seed_passengers(cli.random)?;
        writeln!(out, "Added {} random passengers.", added)?;
    }

    match cli.steps {
        Some(steps) => run_headless(&mut session, steps, &mut out)?,
        None => session.run(input, &mut out)?,
    }

    print_summary(&session);
    Ok(())
}

/// Ask for the number of floors until a positive integer is entered
fn prompt_floors<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Floor> {
    loop {
        write!(out, "Enter number of floors: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read floor count")? == 0 {
            bail!("No floor count given");
        }

        match line.trim().parse::<Floor>() {
            Ok(floors) if floors >= 1 => return Ok(floors),
            _ => writeln!(out, "Please enter a positive whole number.")?,
        }
    }
}

/// Run the simulation without reading commands
fn run_headless<W: Write>(session: &mut Session, steps: usize, out: &mut W) -> Result<()> {
    info!("Running {} steps in headless mode", steps);
    session.write_status(out)?;
    for _ in 0..steps {
        session.step(out)?;
    }
    session.write_status(out)?;
    Ok(())
}

fn print_summary(session: &Session) {
    let elevator = session.elevator();
    let stats = elevator.stats();
    let snapshot = elevator.status();

    info!("=== SIMULATION COMPLETE ===");
    info!("Steps taken: {}", stats.steps);
    info!("Requests submitted: {}", stats.requests_submitted);
    info!("Passengers delivered: {}", stats.passengers_delivered);
    info!("Still riding: {}", snapshot.riding.len());
    info!("Still waiting: {}", snapshot.waiting.len());
}
