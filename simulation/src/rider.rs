//! ----- RIDER MODULE -----
//! One rider cycling through waiting, requesting a pickup, riding the
//! car and getting off at a new floor. The only transition a rider
//! takes on its own is calling the elevator; boarding and leaving are
//! driven by the elevator's door cycle.

use rand::Rng;

use crate::call::Call;
use crate::elevator::Elevator;
use crate::errors::FloorError;
use crate::floor::{validate_floor, Floor, Location, FLOOR_MAX_LIMIT};

pub type RiderId = u32;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Rider {
    id: RiderId,
    location: Location,
    destination: Floor,
    requested_pickup: bool,
}

impl Rider {
    pub fn new<R: Rng>(id: RiderId, floor: Floor, rng: &mut R) -> Result<Self, FloorError> {
        validate_floor(floor)?;
        let mut rider = Rider {
            id: id,
            location: Location::OnFloor(floor),
            destination: floor,
            requested_pickup: false,
        };
        rider.generate_destination(rng);
        Ok(rider)
    }

    pub fn id(&self) -> RiderId {
        self.id
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn destination(&self) -> Floor {
        self.destination
    }

    pub fn requested_pickup(&self) -> bool {
        self.requested_pickup
    }

    pub fn is_inside(&self) -> bool {
        self.location.is_in_car()
    }

    /// Draw a fresh destination, distinct from the current floor, by
    /// redrawing until the two differ. Terminates because the building
    /// has more than one floor. Does nothing while riding the car.
    pub fn generate_destination<R: Rng>(&mut self, rng: &mut R) {
        if let Location::OnFloor(floor) = self.location {
            let mut destination = floor;
            while destination == floor {
                destination = rng.gen_range(1..=FLOOR_MAX_LIMIT);
            }
            self.destination = destination;
        }
    }

    pub fn set_destination(&mut self, floor: Floor) -> Result<(), FloorError> {
        validate_floor(floor)?;
        self.destination = floor;
        Ok(())
    }

    /// Call the elevator to the rider's current floor.
    pub fn request_pickup(&mut self, elevator: &mut Elevator) -> Result<(), FloorError> {
        if let Location::OnFloor(floor) = self.location {
            elevator.enqueue_floor(floor, Call::Outside)?;
            self.requested_pickup = true;
        }
        Ok(())
    }

    /// Per-tick hook for the driver: a waiting rider with no pending
    /// request calls the elevator. Everything else is elevator-driven.
    pub fn tick(&mut self, elevator: &mut Elevator) -> Result<(), FloorError> {
        if !self.is_inside() && !self.requested_pickup {
            self.request_pickup(elevator)?;
        }
        Ok(())
    }

    // State changes below are reserved for the elevator's board and
    // disembark operations, which keep the passenger set and the rider
    // in agreement.

    pub(crate) fn enter(&mut self) {
        self.location = Location::InCar;
        self.requested_pickup = false;
    }

    pub(crate) fn leave<R: Rng>(&mut self, arrival: Floor, rng: &mut R) {
        self.location = Location::OnFloor(arrival);
        self.generate_destination(rng);
    }
}
