//! ----- BUILDING MODULE -----
//! Owns the car and every rider and runs the per-tick protocol: first
//! every waiting rider may call the elevator, then the car takes
//! exactly one movement step against the full rider population. The
//! ordering matters: a request emitted this tick must be visible to
//! this tick's movement step.

use rand::Rng;

use crate::elevator::Elevator;
use crate::errors::{FloorError, SimulationError};
use crate::floor::{Floor, Location, FLOOR_MAX_LIMIT};
use crate::rider::{Rider, RiderId};

pub struct Building {
    elevator: Elevator,
    riders: Vec<Rider>,
    next_rider_id: RiderId,
}

impl Building {
    pub fn new() -> Self {
        Building {
            elevator: Elevator::new(),
            riders: Vec::new(),
            next_rider_id: 1,
        }
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    pub fn riders(&self) -> &[Rider] {
        &self.riders
    }

    /// Add a rider on the given floor with a freshly drawn
    /// destination.
    pub fn add_rider<R: Rng>(&mut self, floor: Floor, rng: &mut R) -> Result<RiderId, FloorError> {
        let id = self.next_rider_id;
        let rider = Rider::new(id, floor, rng)?;
        self.riders.push(rider);
        self.next_rider_id += 1;
        Ok(id)
    }

    /// Add a rider on a uniformly random floor.
    pub fn spawn_rider<R: Rng>(&mut self, rng: &mut R) -> Result<RiderId, FloorError> {
        let floor = rng.gen_range(1..=FLOOR_MAX_LIMIT);
        self.add_rider(floor, rng)
    }

    /// One simulation tick: rider requests first, then one elevator
    /// movement step. Who waits where afterwards is read back through
    /// waiting_at(), which follows the locations the step updated.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Result<(), SimulationError> {
        for rider in self.riders.iter_mut() {
            rider.tick(&mut self.elevator)?;
        }
        self.elevator.step(&mut self.riders, rng)?;
        Ok(())
    }

    pub fn waiting_at(&self, floor: Floor) -> Vec<&Rider> {
        self.riders
            .iter()
            .filter(|rider| rider.location() == Location::OnFloor(floor))
            .collect()
    }

    pub fn riders_in_car(&self) -> usize {
        self.elevator.passengers().len()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::direction::Direction;
    use crate::elevator::Status;
    use crate::floor::validate_floor;

    #[test]
    fn test_add_rider_assigns_increasing_ids() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut building = Building::new();
        assert_eq!(building.add_rider(3, &mut rng).unwrap(), 1);
        assert_eq!(building.add_rider(5, &mut rng).unwrap(), 2);
        assert_eq!(building.riders().len(), 2);
    }

    #[test]
    fn test_spawn_rider_places_on_a_valid_floor() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut building = Building::new();
        for _ in 0..20 {
            building.spawn_rider(&mut rng).unwrap();
        }
        for rider in building.riders() {
            let floor = rider.location().floor().unwrap();
            assert!(validate_floor(floor).is_ok());
            assert_ne!(rider.destination(), floor);
        }
    }

    #[test]
    fn test_requests_are_visible_to_the_same_ticks_movement() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut building = Building::new();
        building.add_rider(3, &mut rng).unwrap();

        // The rider calls on the first tick, so the car already moves.
        building.tick(&mut rng).unwrap();
        assert!(building.riders()[0].requested_pickup());
        assert_eq!(building.elevator().floor(), 2);
    }

    #[test]
    fn test_rider_is_picked_up_and_delivered() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut building = Building::new();
        building.add_rider(3, &mut rng).unwrap();
        building.riders[0].set_destination(5).unwrap();

        building.tick(&mut rng).unwrap(); // floor 2
        building.tick(&mut rng).unwrap(); // floor 3, rider boards
        assert!(building.riders()[0].is_inside());
        assert_eq!(building.riders_in_car(), 1);
        assert!(building.elevator().floor_queue().contains(5));

        building.tick(&mut rng).unwrap(); // floor 4
        building.tick(&mut rng).unwrap(); // floor 5, rider gets off
        assert_eq!(building.elevator().floor(), 5);
        assert_eq!(building.riders()[0].location(), Location::OnFloor(5));
        assert_eq!(building.riders_in_car(), 0);
        assert!(building.waiting_at(5).iter().any(|rider| rider.id() == 1));
    }

    #[test]
    fn test_long_run_keeps_state_consistent() {
        let mut rng = StdRng::seed_from_u64(15);
        let mut building = Building::new();
        for _ in 0..10 {
            building.spawn_rider(&mut rng).unwrap();
        }

        for _ in 0..200 {
            building.tick(&mut rng).unwrap();
            assert!(validate_floor(building.elevator().floor()).is_ok());
            assert!(matches!(building.elevator().status(), Status::Idle));
            assert!(matches!(
                building.elevator().direction(),
                Direction::Up | Direction::Down,
            ));
            for floor in building.elevator().floor_queue().floors() {
                assert!(validate_floor(floor).is_ok());
            }
            for rider in building.riders() {
                let aboard = building.elevator().passengers().contains(&rider.id());
                assert_eq!(aboard, rider.is_inside());
                if let Some(floor) = rider.location().floor() {
                    assert!(validate_floor(floor).is_ok());
                    assert_ne!(rider.destination(), floor);
                }
            }
        }
    }
}
