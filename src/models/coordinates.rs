use serde::{Deserialize, Serialize};

/// A geographic point as supplied by the component caller.
///
/// No range validation happens here: out-of-range values are passed to the
/// mapping library untouched, which renders an empty viewport rather than
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_keeps_the_pair_as_given() {
        let london = Coordinates::new(51.505, -0.09);
        assert_eq!(london.latitude, 51.505);
        assert_eq!(london.longitude, -0.09);
    }

    #[test]
    fn equality_tracks_both_components() {
        let a = Coordinates::new(51.505, -0.09);
        let b = Coordinates::new(51.505, -0.09);
        let c = Coordinates::new(48.8566, 2.3522);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Coordinates::new(51.505, 0.09));
    }

    #[test]
    fn out_of_range_values_are_not_rejected() {
        // Validation is the mapping library's problem, not ours.
        let bogus = Coordinates::new(1234.0, -999.0);
        assert_eq!(bogus.latitude, 1234.0);
    }

    #[test]
    fn serde_round_trip() {
        let original = Coordinates::new(51.505, -0.09);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
