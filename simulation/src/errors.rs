use thiserror::Error;

use crate::floor::{Floor, FLOOR_MAX_LIMIT};
use crate::rider::RiderId;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorError {
    #[error("the floor cannot be less than 1, got {0}")]
    BelowGround(Floor),
    #[error("the floor cannot be more than {}, got {0}", FLOOR_MAX_LIMIT)]
    AboveTop(Floor),
}

/// Movement attempted while the doors are open.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("doors open, the elevator cannot move")]
pub struct MoveError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorsError {
    #[error("cannot open the doors, the elevator is not idle")]
    NotIdle,
    #[error("cannot close the doors, the doors are not open")]
    NotOpen,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardingError {
    #[error("doors closed, rider {0} cannot board or leave")]
    DoorsClosed(RiderId),
    #[error("rider {0} is already in the elevator")]
    AlreadyAboard(RiderId),
    #[error("rider {0} is not in the elevator")]
    NotAboard(RiderId),
}

/// Umbrella for operations that can fail in more than one way, such as
/// a movement step that runs a full door cycle on arrival.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    #[error(transparent)]
    Floor(#[from] FloorError),
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Doors(#[from] DoorsError),
    #[error(transparent)]
    Boarding(#[from] BoardingError),
}
