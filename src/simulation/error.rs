//! Validation errors raised by the elevator core.
//!
//! Every variant is a local, recoverable failure reported to the immediate
//! caller. None of them can occur inside `Elevator::step`.

use thiserror::Error;

use super::types::Floor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElevatorError {
    #[error("invalid floor number {floor} (building has floors 1 to {floor_count})")]
    InvalidFloor { floor: Floor, floor_count: Floor },

    #[error("start and destination cannot be the same (floor {floor})")]
    SameFloor { floor: Floor },

    #[error("floor count {floor_count} is below the minimum of {minimum}")]
    InvalidFloorCount { floor_count: Floor, minimum: Floor },
}

/// Shorthand result type for the elevator core.
pub type ElevatorResult<T> = Result<T, ElevatorError>;
