//! Console front end for the elevator simulation
//!
//! Parses text commands, renders snapshots and drives the interactive loop.
//! All scheduling decisions stay in the simulation module.

mod command;
mod render;
mod session;

pub use command::{Command, CommandError, HELP};
pub use render::{format_passengers, render_building, render_status, render_step};
pub use session::{Flow, Session, DEFAULT_STEP_DELAY_MS};
