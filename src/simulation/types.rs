//! Core types for the elevator simulation
//!
//! These are standalone types shared by the scheduler and the console.

use std::fmt;

/// A floor number. Floors are numbered from 1 up to the building's floor count.
pub type Floor = u32;

/// The lowest floor of every building
pub const GROUND_FLOOR: Floor = 1;

/// A unique identifier for a ride request
/// Assigned in submission order, so it doubles as a stable sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub usize);

/// Direction of travel of the elevator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}

/// Counters accumulated over the lifetime of an elevator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElevatorStats {
    /// Number of completed steps
    pub steps: u64,
    /// Requests accepted by `submit` (manual or generated)
    pub requests_submitted: u64,
    /// Passengers dropped off at their destination
    pub passengers_delivered: u64,
}
