use crate::errors::FloorError;

pub type Floor = u8;

/// Floors are numbered 1 (ground) up to and including FLOOR_MAX_LIMIT.
pub const FLOOR_MAX_LIMIT: Floor = 10;

pub fn validate_floor(floor: Floor) -> Result<(), FloorError> {
    if floor < 1 {
        return Err(FloorError::BelowGround(floor))
    }
    if floor > FLOOR_MAX_LIMIT {
        return Err(FloorError::AboveTop(floor))
    }
    Ok(())
}

/// Where a rider currently is. A rider inside the car is on no floor
/// at all, so the two cases are kept as separate variants instead of
/// reserving a magic floor number.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    OnFloor(Floor),
    InCar,
}

impl Location {
    pub fn floor(self) -> Option<Floor> {
        match self {
            Location::OnFloor(floor) => Some(floor),
            Location::InCar => None,
        }
    }

    pub fn is_in_car(self) -> bool {
        self == Location::InCar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_floor_accepts_every_real_floor() {
        for floor in 1..=FLOOR_MAX_LIMIT {
            assert_eq!(validate_floor(floor), Ok(()));
        }
    }

    #[test]
    fn test_validate_floor_rejects_below_ground() {
        assert_eq!(validate_floor(0), Err(FloorError::BelowGround(0)));
    }

    #[test]
    fn test_validate_floor_rejects_above_top() {
        assert_eq!(
            validate_floor(FLOOR_MAX_LIMIT + 1),
            Err(FloorError::AboveTop(FLOOR_MAX_LIMIT + 1)),
        );
    }

    #[test]
    fn test_location_floor() {
        assert_eq!(Location::OnFloor(4).floor(), Some(4));
        assert_eq!(Location::InCar.floor(), None);
        assert!(Location::InCar.is_in_car());
        assert!(!Location::OnFloor(4).is_in_car());
    }
}
