use crate::error::{Error, Result};
use crate::types::distance::{KM_PER_NAUTICAL_MILE, MILES_PER_NAUTICAL_MILE};
use std::fmt;

/// A speed of travel, stored in knots (nautical miles per hour)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Speed {
    knots: f64,
}

impl Speed {
    /// Create a speed from a magnitude in knots
    ///
    /// Fails if the magnitude is not a finite number or is negative.
    pub fn new(knots: f64) -> Result<Self> {
        if !knots.is_finite() {
            return Err(Error::NonFinite {
                quantity: "speed",
                value: knots,
            });
        }
        if knots < 0.0 {
            return Err(Error::NegativeSpeed(knots));
        }
        Ok(Self { knots })
    }

    pub fn in_knots(&self) -> f64 {
        self.knots
    }

    pub fn in_kmh(&self) -> f64 {
        self.knots * KM_PER_NAUTICAL_MILE
    }

    pub fn in_mph(&self) -> f64 {
        self.knots * MILES_PER_NAUTICAL_MILE
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Speed: {} knots", self.knots)
    }
}
