use crate::error::{Error, Result};
use std::fmt;

/// Kilometers per nautical mile.
pub(crate) const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// Statute miles per nautical mile.
pub(crate) const MILES_PER_NAUTICAL_MILE: f64 = 1.15078;

/// A distance over the Earth's surface, stored in nautical miles
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance {
    nautical_miles: f64,
}

impl Distance {
    /// Create a distance from a magnitude in nautical miles
    ///
    /// Fails if the magnitude is not a finite number or is negative.
    pub fn new(nautical_miles: f64) -> Result<Self> {
        if !nautical_miles.is_finite() {
            return Err(Error::NonFinite {
                quantity: "distance",
                value: nautical_miles,
            });
        }
        if nautical_miles < 0.0 {
            return Err(Error::NegativeDistance(nautical_miles));
        }
        Ok(Self { nautical_miles })
    }

    /// Wrap a great-circle arc length, which is non-negative by
    /// construction.
    pub(crate) fn from_great_circle(nautical_miles: f64) -> Self {
        debug_assert!(nautical_miles >= 0.0);
        Self { nautical_miles }
    }

    pub fn in_nautical_miles(&self) -> f64 {
        self.nautical_miles
    }

    pub fn in_km(&self) -> f64 {
        self.nautical_miles * KM_PER_NAUTICAL_MILE
    }

    pub fn in_miles(&self) -> f64 {
        self.nautical_miles * MILES_PER_NAUTICAL_MILE
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance: {} Nautical Miles", self.nautical_miles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use claims::{assert_err, assert_ok};

    #[test]
    fn accepts_fractional_magnitudes() {
        let distance = assert_ok!(Distance::new(19.2345));
        assert_eq!(distance.in_nautical_miles(), 19.2345);
    }

    #[test]
    fn accepts_zero() {
        let distance = assert_ok!(Distance::new(0.0));
        assert_eq!(distance.in_nautical_miles(), 0.0);
    }

    #[test]
    fn accepts_magnitudes_below_one() {
        let distance = assert_ok!(Distance::new(0.2));
        assert_eq!(distance.in_nautical_miles(), 0.2);
    }

    #[test]
    fn rejects_negative_magnitudes() {
        let err = assert_err!(Distance::new(-2.0));
        assert!(matches!(err, Error::NegativeDistance(_)));
    }

    #[test]
    fn rejects_nan() {
        let err = assert_err!(Distance::new(f64::NAN));
        assert!(matches!(err, Error::NonFinite { quantity: "distance", .. }));
    }

    #[test]
    fn rejects_infinity() {
        assert_err!(Distance::new(f64::INFINITY));
    }

    #[test]
    fn converts_to_km() {
        let distance = Distance::new(10.0).unwrap();
        assert_abs_diff_eq!(distance.in_km(), 18.52, epsilon = 1e-12);
    }

    #[test]
    fn converts_to_statute_miles() {
        let distance = Distance::new(20.0).unwrap();
        assert_abs_diff_eq!(distance.in_miles(), 23.0156, epsilon = 1e-12);
    }

    #[test]
    fn display() {
        let distance = Distance::new(10.0).unwrap();
        assert_eq!(distance.to_string(), "Distance: 10 Nautical Miles");
    }
}
