//! Read-only views of the elevator state handed to the presentation layer

use super::request::RideRequest;
use super::types::{Direction, Floor};

/// The whole building at one instant
///
/// A snapshot is a detached copy: holding one never borrows the elevator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub floor_count: Floor,
    pub current_floor: Floor,
    pub direction: Direction,
    /// Passengers inside, in boarding order
    pub riding: Vec<RideRequest>,
    /// Passengers waiting anywhere in the building, in submission order
    pub waiting: Vec<RideRequest>,
}

impl StateSnapshot {
    /// Passengers waiting on a single floor, in submission order
    pub fn waiting_on(&self, floor: Floor) -> Vec<RideRequest> {
        self.waiting
            .iter()
            .filter(|r| r.start == floor)
            .copied()
            .collect()
    }

    pub fn is_idle(&self) -> bool {
        self.riding.is_empty() && self.waiting.is_empty()
    }
}

/// Everything that happened during one call to `Elevator::step`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Floor the elevator was at when the step began
    pub from_floor: Floor,
    /// Passengers who alighted at `from_floor`
    pub dropped_off: Vec<RideRequest>,
    /// Passengers who boarded at `from_floor`
    pub picked_up: Vec<RideRequest>,
    /// Whether the direction flipped before moving
    pub reversed: bool,
    /// State after the move
    pub snapshot: StateSnapshot,
}
