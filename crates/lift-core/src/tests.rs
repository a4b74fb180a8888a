//! Unit tests for lift-core primitives.

#[cfg(test)]
mod floor {
    use crate::{Floor, FloorRange, LiftError};

    #[test]
    fn ordering_and_distance() {
        assert!(Floor(2) < Floor(5));
        assert_eq!(Floor(2).distance(Floor(9)), 7);
        assert_eq!(Floor(9).distance(Floor(2)), 7);
    }

    #[test]
    fn display() {
        assert_eq!(Floor(7).to_string(), "Floor 7");
        assert_eq!(FloorRange::default().to_string(), "0..=10");
    }

    #[test]
    fn parse_number_and_ground() {
        assert_eq!("4".parse::<Floor>().unwrap(), Floor(4));
        assert_eq!(" g ".parse::<Floor>().unwrap(), Floor::GROUND);
        assert_eq!("Ground".parse::<Floor>().unwrap(), Floor::GROUND);
        assert!(matches!("four".parse::<Floor>(), Err(LiftError::Parse(_))));
    }

    #[test]
    fn range_bounds() {
        let range = FloorRange::up_to(Floor(10)).unwrap();
        assert!(range.contains(Floor(0)));
        assert!(range.contains(Floor(10)));
        assert!(!range.contains(Floor(11)));
        assert!(!range.contains(Floor(-1)));
        assert_eq!(range.len(), 11);
        assert_eq!(range.floors().last(), Some(Floor(10)));
    }

    #[test]
    fn inverted_range_rejected() {
        assert!(matches!(
            FloorRange::new(Floor(3), Floor(1)),
            Err(LiftError::Config(_))
        ));
    }

    #[test]
    fn check_floor_reports_range() {
        let range = FloorRange::default();
        match range.check_floor(Floor(12)) {
            Err(LiftError::InvalidFloor { floor, range: r }) => {
                assert_eq!(floor, Floor(12));
                assert_eq!(r, range);
            }
            other => panic!("expected InvalidFloor, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod call_validation {
    use crate::{CallRequest, Direction, Floor, FloorRange, LiftError};

    fn range() -> FloorRange {
        FloorRange::default()
    }

    #[test]
    fn ordinary_calls_accepted() {
        assert!(range().check_call(&CallRequest::up(0)).is_ok());
        assert!(range().check_call(&CallRequest::down(10)).is_ok());
        assert!(range().check_call(&CallRequest::down(4)).is_ok());
        assert!(range().check_call(&CallRequest::up(9)).is_ok());
    }

    #[test]
    fn down_from_ground_rejected() {
        let err = range().check_call(&CallRequest::down(0)).unwrap_err();
        assert!(matches!(
            err,
            LiftError::InvalidDirectionForFloor { floor: Floor(0), direction: Direction::Down }
        ));
    }

    #[test]
    fn up_from_top_rejected() {
        let err = range().check_call(&CallRequest::up(10)).unwrap_err();
        assert!(matches!(err, LiftError::InvalidDirectionForFloor { .. }));
    }

    #[test]
    fn idle_is_not_a_call_direction() {
        let err = range().check_call(&CallRequest::new(5, Direction::Idle)).unwrap_err();
        assert!(matches!(err, LiftError::InvalidDirectionForFloor { .. }));
    }

    #[test]
    fn floor_checked_before_direction() {
        let err = range().check_call(&CallRequest::up(42)).unwrap_err();
        assert!(matches!(err, LiftError::InvalidFloor { .. }));
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Idle.opposite(), Direction::Idle);
    }

    #[test]
    fn parse() {
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("d".parse::<Direction>().unwrap(), Direction::Down);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(Direction::default(), Direction::Idle);
        assert!(!Direction::Idle.is_moving());
    }
}

#[cfg(test)]
mod request {
    use crate::{CallRequest, Destination, Direction, Floor};

    #[test]
    fn destination_converts_to_floor() {
        let floor: Floor = Destination::new(6).into();
        assert_eq!(floor, Floor(6));
    }

    #[test]
    fn call_keeps_origin() {
        let call = CallRequest::down(3);
        assert_eq!(call.floor, Floor(3));
        assert_eq!(call.origin, Direction::Down);
    }
}

#[cfg(test)]
mod config {
    use crate::{Floor, LiftConfig, LiftError};

    #[test]
    fn default_serves_ground_to_ten() {
        let range = LiftConfig::default().floor_range().unwrap();
        assert_eq!(range.lowest, Floor(0));
        assert_eq!(range.highest, Floor(10));
    }

    #[test]
    fn negative_max_floor_invalid() {
        assert!(matches!(LiftConfig::new(-2).validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn single_floor_building_valid() {
        assert!(LiftConfig::new(0).validate().is_ok());
    }
}
