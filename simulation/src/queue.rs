use crate::direction::Direction;
use crate::floor::{Floor, FLOOR_MAX_LIMIT};

/// Set of floors the elevator still has to visit, kept as one flag per
/// floor. Entry 0 is unused so floors index directly. Callers validate
/// floors before inserting; the queue itself never holds an
/// out-of-range floor.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct FloorQueue {
    queued: Vec<bool>,
}

impl FloorQueue {
    pub fn new() -> Self {
        FloorQueue {
            queued: vec![false; FLOOR_MAX_LIMIT as usize + 1],
        }
    }

    pub fn insert(&mut self, floor: Floor) {
        self.queued[floor as usize] = true;
    }

    pub fn remove(&mut self, floor: Floor) {
        self.queued[floor as usize] = false;
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.queued[floor as usize]
    }

    pub fn is_empty(&self) -> bool {
        !self.queued.iter().any(|queued| *queued)
    }

    pub fn floors(&self) -> Vec<Floor> {
        let mut floors = Vec::new();
        for floor in 1..=FLOOR_MAX_LIMIT {
            if self.queued[floor as usize] {
                floors.push(floor);
            }
        }
        floors
    }

    /// True if any queued floor lies strictly ahead of the given floor
    /// in the given travel direction.
    pub fn further_requests_in_direction(&self, floor: Floor, direction: Direction) -> bool {
        let range = if direction == Direction::Up {
            (floor + 1)..(FLOOR_MAX_LIMIT + 1)
        } else {
            1..floor
        };
        for f in range {
            if self.queued[f as usize] {
                return true
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut queue = FloorQueue::new();
        queue.insert(4);
        queue.insert(4);
        assert!(queue.contains(4));
        assert_eq!(queue.floors(), vec![4]);
    }

    #[test]
    fn test_remove() {
        let mut queue = FloorQueue::new();
        queue.insert(4);
        queue.remove(4);
        assert!(!queue.contains(4));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_is_empty_on_new_queue() {
        assert!(FloorQueue::new().is_empty());
    }

    #[test]
    fn test_floors_are_sorted() {
        let mut queue = FloorQueue::new();
        queue.insert(9);
        queue.insert(2);
        queue.insert(5);
        assert_eq!(queue.floors(), vec![2, 5, 9]);
    }

    #[test]
    fn test_further_requests_in_direction() {
        let mut queue = FloorQueue::new();
        queue.insert(3);
        queue.insert(7);
        assert!(queue.further_requests_in_direction(5, Direction::Up));
        assert!(queue.further_requests_in_direction(5, Direction::Down));
        assert!(!queue.further_requests_in_direction(7, Direction::Up));
        assert!(!queue.further_requests_in_direction(3, Direction::Down));
    }

    #[test]
    fn test_current_floor_is_not_ahead() {
        let mut queue = FloorQueue::new();
        queue.insert(5);
        assert!(!queue.further_requests_in_direction(5, Direction::Up));
        assert!(!queue.further_requests_in_direction(5, Direction::Down));
    }
}
