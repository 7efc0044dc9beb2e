//! Elevator Simulation Library
//!
//! A single SCAN elevator that can be driven from the console or headlessly.

pub mod console;
pub mod simulation;
