//! Direction of travel relative to the terminal the clock watches

/// Wire literal for a departing ferry
pub const DEPARTING: &str = "DEPARTING";

/// Wire literal for an arriving ferry
pub const ARRIVING: &str = "ARRIVING";

/// Ferry travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Leaving the watched terminal
    #[default]
    Departing,
    /// Heading into the watched terminal
    Arriving,
}

impl Direction {
    /// Match a wire literal exactly (case-sensitive)
    pub fn from_wire(literal: &str) -> Option<Self> {
        match literal {
            DEPARTING => Some(Direction::Departing),
            ARRIVING => Some(Direction::Arriving),
            _ => None,
        }
    }

    /// Wire literal for this direction
    pub fn as_wire(self) -> &'static str {
        match self {
            Direction::Departing => DEPARTING,
            Direction::Arriving => ARRIVING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_exact() {
        assert_eq!(Direction::from_wire("DEPARTING"), Some(Direction::Departing));
        assert_eq!(Direction::from_wire("ARRIVING"), Some(Direction::Arriving));
    }

    #[test]
    fn test_from_wire_is_case_sensitive() {
        assert_eq!(Direction::from_wire("departing"), None);
        assert_eq!(Direction::from_wire("Arriving"), None);
        assert_eq!(Direction::from_wire(""), None);
    }

    #[test]
    fn test_default_is_departing() {
        assert_eq!(Direction::default(), Direction::Departing);
    }
}
