use crate::error::{Error, Result};
use std::fmt;

/// A heading on a compass rose, in whole degrees clockwise from true
/// north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompassBearing {
    degrees: u16,
}

impl CompassBearing {
    /// Create a bearing from whole degrees
    ///
    /// Both ends of the compass rose are accepted: 0 and 360 are valid,
    /// anything outside that range is rejected.
    pub fn new(degrees: i32) -> Result<Self> {
        if !(0..=360).contains(&degrees) {
            return Err(Error::BearingOutOfRange(degrees));
        }
        Ok(Self {
            degrees: degrees as u16,
        })
    }

    pub fn degrees(&self) -> u16 {
        self.degrees
    }

    /// The reciprocal bearing, 180° opposed, wrapped into [0, 360)
    pub fn reciprocal(&self) -> CompassBearing {
        CompassBearing {
            degrees: (self.degrees + 180) % 360,
        }
    }
}

impl fmt::Display for CompassBearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bearing: {}°", self.degrees)
    }
}
