//! Ride requests for the elevator simulation

use std::fmt;

use super::types::{Floor, RequestId};

/// A passenger's intent to travel from one floor to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideRequest {
    pub id: RequestId,
    /// Floor where the passenger is waiting
    pub start: Floor,
    /// Floor where the passenger wants to go
    pub destination: Floor,
    /// True once the passenger is inside the elevator
    pub boarded: bool,
}

impl RideRequest {
    pub(crate) fn new(id: RequestId, start: Floor, destination: Floor) -> Self {
        Self {
            id,
            start,
            destination,
            boarded: false,
        }
    }

    /// Mark the request as picked up
    pub(crate) fn board(&mut self) {
        self.boarded = true;
    }
}

/// Display format for passengers: "3 to 9"
impl fmt::Display for RideRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.destination)
    }
}
