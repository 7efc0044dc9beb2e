//! The SCAN elevator state machine
//!
//! This is the entry point for running the simulation. It owns the building,
//! the elevator position and both request pools. Callers only ever receive
//! detached snapshots of that state.

use log::{debug, info};
use rand::Rng;

use super::error::{ElevatorError, ElevatorResult};
use super::request::RideRequest;
use super::snapshot::{StateSnapshot, StepReport};
use super::types::{Direction, ElevatorStats, Floor, RequestId, GROUND_FLOOR};

/// Fewest floors a building may have
pub const MIN_FLOORS: Floor = 1;

/// Fewest floors needed before a distinct start/destination pair exists
pub const MIN_FLOORS_FOR_RANDOM: Floor = 2;

/// A single elevator serving a building with a fixed number of floors
#[derive(Debug, Clone)]
pub struct Elevator {
    floor_count: Floor,
    current_floor: Floor,
    direction: Direction,

    /// Requests waiting on a floor, in submission order
    waiting: Vec<RideRequest>,

    /// Requests currently inside, in boarding order
    riding: Vec<RideRequest>,

    /// Next ID to assign
    next_id: usize,

    stats: ElevatorStats,
}

impl Elevator {
    /// Create an elevator parked at the ground floor heading up
    pub fn new(floor_count: Floor) -> ElevatorResult<Self> {
        if floor_count < MIN_FLOORS {
            return Err(ElevatorError::InvalidFloorCount {
                floor_count,
                minimum: MIN_FLOORS,
            });
        }

        Ok(Self {
            floor_count,
            current_floor: GROUND_FLOOR,
            direction: Direction::Up,
            waiting: Vec::new(),
            riding: Vec::new(),
            next_id: 0,
            stats: ElevatorStats::default(),
        })
    }

    fn next_request_id(&mut self) -> RequestId {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        id
    }

    fn check_floor(&self, floor: Floor) -> ElevatorResult<()> {
        if (GROUND_FLOOR..=self.floor_count).contains(&floor) {
            Ok(())
        } else {
            Err(ElevatorError::InvalidFloor {
                floor,
                floor_count: self.floor_count,
            })
        }
    }

    /// Add a passenger waiting at `start` who wants to go to `destination`
    ///
    /// Nothing is mutated when validation fails. The passenger is not picked
    /// up until the next step.
    pub fn submit(&mut self, start: Floor, destination: Floor) -> ElevatorResult<RequestId> {
        self.check_floor(start)?;
        self.check_floor(destination)?;
        if start == destination {
            return Err(ElevatorError::SameFloor { floor: start });
        }

        let id = self.next_request_id();
        self.waiting.push(RideRequest::new(id, start, destination));
        self.stats.requests_submitted += 1;
        debug!("Request {} submitted: {} to {}", id.0, start, destination);
        Ok(id)
    }

    /// Add `count` random passengers drawn uniformly over the building
    ///
    /// The destination is re-drawn until it differs from the start. Returns the
    /// number of passengers added.
    pub fn submit_batch<R: Rng>(&mut self, count: usize, rng: &mut R) -> ElevatorResult<usize> {
        if count == 0 {
            return Ok(0);
        }
        if self.floor_count < MIN_FLOORS_FOR_RANDOM {
            return Err(ElevatorError::InvalidFloorCount {
                floor_count: self.floor_count,
                minimum: MIN_FLOORS_FOR_RANDOM,
            });
        }

        for _ in 0..count {
            let start = rng.random_range(GROUND_FLOOR..=self.floor_count);
            let mut destination = rng.random_range(GROUND_FLOOR..=self.floor_count);
            while destination == start {
                destination = rng.random_range(GROUND_FLOOR..=self.floor_count);
            }
            self.submit(start, destination)?;
        }

        info!("Added {} random passengers", count);
        Ok(count)
    }

    /// Advance the simulation by one floor using SCAN
    ///
    /// Phases run in a fixed order: alight, board, reverse at an extreme
    /// floor, move.
    pub fn step(&mut self) -> StepReport {
        let from_floor = self.current_floor;

        let dropped_off = self.alight();
        let picked_up = self.board();
        let reversed = self.reverse_at_extremes();
        self.advance();

        self.stats.steps += 1;
        self.stats.passengers_delivered += dropped_off.len() as u64;

        StepReport {
            from_floor,
            dropped_off,
            picked_up,
            reversed,
            snapshot: self.snapshot(),
        }
    }

    /// Drop off passengers who reached their destination
    fn alight(&mut self) -> Vec<RideRequest> {
        let floor = self.current_floor;
        let (arrived, still_riding): (Vec<_>, Vec<_>) = std::mem::take(&mut self.riding)
            .into_iter()
            .partition(|r| r.destination == floor);
        self.riding = still_riding;

        for request in &arrived {
            debug!("Dropped off passenger {} ({}) at floor {}", request.id.0, request, floor);
        }
        arrived
    }

    /// Pick up passengers waiting on this floor, first submitted first boarded
    fn board(&mut self) -> Vec<RideRequest> {
        let floor = self.current_floor;
        let (mut boarding, still_waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.waiting)
            .into_iter()
            .partition(|r| r.start == floor);
        self.waiting = still_waiting;

        for request in &mut boarding {
            request.board();
            debug!("Picked up passenger {} ({}) at floor {}", request.id.0, request, floor);
        }
        self.riding.extend(boarding.iter().copied());
        boarding
    }

    /// Reverse direction at the top or bottom floor
    ///
    /// Purely positional: the sweep always reaches the physical end of the
    /// shaft whether or not anyone is waiting further along.
    fn reverse_at_extremes(&mut self) -> bool {
        let at_top = self.direction == Direction::Up && self.current_floor == self.floor_count;
        let at_bottom = self.direction == Direction::Down && self.current_floor == GROUND_FLOOR;
        if at_top || at_bottom {
            self.direction = self.direction.reversed();
            debug!("Reversed to {} at floor {}", self.direction, self.current_floor);
            true
        } else {
            false
        }
    }

    /// Move one floor in the current direction
    fn advance(&mut self) {
        let next = match self.direction {
            Direction::Up => self.current_floor + 1,
            Direction::Down => self.current_floor - 1,
        };
        // Only a one-floor building has no neighbour to move to
        if (GROUND_FLOOR..=self.floor_count).contains(&next) {
            self.current_floor = next;
        }
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            floor_count: self.floor_count,
            current_floor: self.current_floor,
            direction: self.direction,
            riding: self.riding.clone(),
            waiting: self.waiting.clone(),
        }
    }

    /// Current state for plain-text status output
    pub fn status(&self) -> StateSnapshot {
        self.snapshot()
    }

    /// Current state for the building diagram; same payload as `status`
    pub fn visualize(&self) -> StateSnapshot {
        self.snapshot()
    }

    pub fn floor_count(&self) -> Floor {
        self.floor_count
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn stats(&self) -> ElevatorStats {
        self.stats
    }
}
