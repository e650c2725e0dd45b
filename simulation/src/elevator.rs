//! ----- ELEVATOR MODULE -----
//! The single car: door state machine, floor queue and the movement
//! step. One call to step() advances the car by at most one floor and
//! runs a full door cycle when it arrives at a queued floor. The car
//! sweeps in its travel direction until no queued floor lies ahead,
//! then reverses.

use std::collections::HashSet;

use rand::Rng;

use crate::call::Call;
use crate::direction::Direction;
use crate::errors::{BoardingError, DoorsError, FloorError, MoveError, SimulationError};
use crate::floor::{validate_floor, Floor, Location, FLOOR_MAX_LIMIT};
use crate::queue::FloorQueue;
use crate::rider::{Rider, RiderId};

/// Nominal capacity of the car. Boarding does not enforce it; the
/// count is shown by the display layer only.
pub const ELEVATOR_CAPACITY: usize = 5;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Moving,
    Open,
}

impl Status {
    pub fn as_string(self) -> String {
        match self {
            Status::Idle => String::from("idle"),
            Status::Moving => String::from("moving"),
            Status::Open => String::from("open"),
        }
    }
}

/// The passenger set is the single source of truth for who is aboard.
/// Rider location and flags are only ever updated through board() and
/// disembark(), so the two views cannot drift apart.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Elevator {
    floor: Floor,
    direction: Direction,
    status: Status,
    floor_queue: FloorQueue,
    passengers: HashSet<RiderId>,
}

impl Elevator {
    pub fn new() -> Self {
        Elevator {
            floor: 1,
            direction: Direction::Up,
            status: Status::Idle,
            floor_queue: FloorQueue::new(),
            passengers: HashSet::new(),
        }
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn floor_queue(&self) -> &FloorQueue {
        &self.floor_queue
    }

    pub fn passengers(&self) -> &HashSet<RiderId> {
        &self.passengers
    }

    /// Add a stop to the queue. Inside and outside calls feed the same
    /// queue; duplicates collapse.
    pub fn enqueue_floor(&mut self, floor: Floor, call: Call) -> Result<(), FloorError> {
        validate_floor(floor)?;
        self.floor_queue.insert(floor);
        log::debug!("Floor {} queued ({} call).", floor, call.as_string());
        Ok(())
    }

    pub fn open_doors(&mut self) -> Result<(), DoorsError> {
        if self.status != Status::Idle {
            return Err(DoorsError::NotIdle)
        }
        self.status = Status::Open;
        log::debug!("Elevator doors opened.");
        Ok(())
    }

    pub fn close_doors(&mut self) -> Result<(), DoorsError> {
        if self.status != Status::Open {
            return Err(DoorsError::NotOpen)
        }
        self.status = Status::Idle;
        log::debug!("Elevator doors closed.");
        Ok(())
    }

    /// Take a rider aboard: the rider's destination becomes a queued
    /// stop and the rider moves into the car. Legal only while the
    /// doors are open.
    pub fn board(&mut self, rider: &mut Rider) -> Result<(), BoardingError> {
        if self.status != Status::Open {
            return Err(BoardingError::DoorsClosed(rider.id()))
        }
        if self.passengers.contains(&rider.id()) {
            return Err(BoardingError::AlreadyAboard(rider.id()))
        }
        self.passengers.insert(rider.id());
        self.floor_queue.insert(rider.destination());
        rider.enter();
        log::debug!("Rider {} entered the elevator.", rider.id());
        Ok(())
    }

    /// Let a rider off at the current floor. The rider picks a fresh
    /// destination for its next trip. Legal only while the doors are
    /// open.
    pub fn disembark<R: Rng>(&mut self, rider: &mut Rider, rng: &mut R) -> Result<(), BoardingError> {
        if self.status != Status::Open {
            return Err(BoardingError::DoorsClosed(rider.id()))
        }
        if !self.passengers.remove(&rider.id()) {
            return Err(BoardingError::NotAboard(rider.id()))
        }
        rider.leave(self.floor, rng);
        log::debug!("Rider {} left the elevator.", rider.id());
        Ok(())
    }

    /// Advance the car by one floor towards its travel direction. With
    /// an empty queue the car has nothing to do and stays put. An
    /// advance past either end of the shaft is swallowed: the car
    /// stays on its floor for this step and direction correction flips
    /// it around. Arriving at a queued floor runs the full door cycle
    /// against the riders passed in.
    pub fn step<R: Rng>(&mut self, riders: &mut [Rider], rng: &mut R) -> Result<(), SimulationError> {
        if self.floor_queue.is_empty() {
            return Ok(())
        }
        if self.status == Status::Open {
            return Err(MoveError.into())
        }

        log::debug!(
            "Elevator starts moving. Current floor: {}. Direction: {}.",
            self.floor,
            self.direction.as_string(),
        );
        self.status = Status::Moving;

        let next = match self.direction {
            Direction::Up => self.floor + 1,
            Direction::Down => self.floor - 1,
        };
        match validate_floor(next) {
            Ok(()) => {
                self.floor = next;
                self.status = Status::Idle;
                if self.floor_queue.contains(self.floor) {
                    self.serve_current_floor(riders, rng)?;
                }
            },
            Err(_) => {
                // Top or bottom of the shaft, stay put for this step.
                self.status = Status::Idle;
                log::debug!("Elevator moving. Floor limit reached.");
            },
        }

        self.correct_direction();
        log::debug!(
            "Elevator finished moving. Current floor: {}. Direction: {}.",
            self.floor,
            self.direction.as_string(),
        );
        Ok(())
    }

    /// The door cycle: open, board everyone waiting on this floor,
    /// let off everyone whose destination this is, close, and clear
    /// the stop. Boarding comes before disembarking.
    fn serve_current_floor<R: Rng>(
        &mut self,
        riders: &mut [Rider],
        rng: &mut R,
    ) -> Result<(), SimulationError> {
        self.open_doors()?;
        for rider in riders.iter_mut() {
            if rider.location() == Location::OnFloor(self.floor) {
                self.board(rider)?;
            }
        }
        for rider in riders.iter_mut() {
            if self.passengers.contains(&rider.id()) && rider.destination() == self.floor {
                self.disembark(rider, rng)?;
            }
        }
        self.close_doors()?;
        self.floor_queue.remove(self.floor);
        Ok(())
    }

    /// SCAN-style direction correction, run after every step: forced
    /// up at the bottom, forced down at the top, otherwise reverse
    /// when no queued floor lies strictly ahead.
    fn correct_direction(&mut self) {
        if self.floor == 1 {
            self.direction = Direction::Up;
        } else if self.floor == FLOOR_MAX_LIMIT {
            self.direction = Direction::Down;
        } else if !self.floor_queue.further_requests_in_direction(self.floor, self.direction) {
            self.direction = self.direction.opposite();
        }
    }
}
