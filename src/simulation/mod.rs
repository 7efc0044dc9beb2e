//! Standalone elevator simulation module
//!
//! This module contains the SCAN scheduling core. It does no I/O and can be
//! driven by the console, by tests, or by any other front end.

mod elevator;
mod error;
mod request;
mod snapshot;
mod types;

// Re-export public types for external use
pub use elevator::{Elevator, MIN_FLOORS, MIN_FLOORS_FOR_RANDOM};
pub use error::{ElevatorError, ElevatorResult};
pub use request::RideRequest;
pub use snapshot::{StateSnapshot, StepReport};
pub use types::{Direction, ElevatorStats, Floor, RequestId, GROUND_FLOOR};
