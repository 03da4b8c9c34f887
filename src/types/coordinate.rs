use crate::error::{Error, Result};
use std::fmt;

const DEGREE_IN_MINUTES: f64 = 60.0;
const DEGREE_IN_SECONDS: f64 = 3600.0;

/// Compass point naming the hemisphere of a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    North,
    East,
    South,
    West,
}

impl Compass {
    /// Parse from the single-letter form
    pub fn from_char(letter: char) -> Result<Self> {
        match letter {
            'N' => Ok(Compass::North),
            'E' => Ok(Compass::East),
            'S' => Ok(Compass::South),
            'W' => Ok(Compass::West),
            _ => Err(Error::InvalidCompassPoint(letter)),
        }
    }

    /// The single-letter form
    pub fn as_char(&self) -> char {
        match self {
            Compass::North => 'N',
            Compass::East => 'E',
            Compass::South => 'S',
            Compass::West => 'W',
        }
    }

    /// Southern and western hemispheres carry negative decimal angles.
    fn negates(&self) -> bool {
        matches!(self, Compass::South | Compass::West)
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One angular component of a position: a latitude or a longitude
///
/// Stored as whole degrees, arc-minutes and arc-seconds plus a compass
/// point. Degrees keep the sign of the decimal they were split from;
/// the compass point carries the hemisphere. Minutes and seconds are
/// taken as given: values of 60 or more are folded into the decimal
/// view rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    degrees: i32,
    minutes: u32,
    seconds: u32,
    compass: Compass,
}

impl Coordinate {
    pub fn new(degrees: i32, minutes: u32, seconds: u32, compass: Compass) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            compass,
        }
    }

    /// Split a decimal latitude into degrees/minutes/seconds
    ///
    /// The hemisphere follows the sign of `decimal`: north for zero and
    /// positive values, south for negative ones.
    pub fn latitude_from_decimal(decimal: f64) -> Self {
        let (degrees, minutes, seconds) = split_decimal(decimal);
        let compass = if decimal < 0.0 {
            Compass::South
        } else {
            Compass::North
        };
        Self::new(degrees, minutes, seconds, compass)
    }

    /// Split a decimal longitude into degrees/minutes/seconds
    ///
    /// The hemisphere follows the sign of `decimal`: east for zero and
    /// positive values, west for negative ones.
    pub fn longitude_from_decimal(decimal: f64) -> Self {
        let (degrees, minutes, seconds) = split_decimal(decimal);
        let compass = if decimal < 0.0 {
            Compass::West
        } else {
            Compass::East
        };
        Self::new(degrees, minutes, seconds, compass)
    }

    pub fn degrees(&self) -> i32 {
        self.degrees
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn compass(&self) -> Compass {
        self.compass
    }

    /// The coordinate as a signed decimal angle
    ///
    /// Inverse of the decimal factories up to their truncation to whole
    /// arc-seconds: a round trip agrees within 1/3600 of a degree.
    pub fn as_decimal(&self) -> f64 {
        let decimal = self.degrees.unsigned_abs() as f64
            + self.minutes as f64 / DEGREE_IN_MINUTES
            + self.seconds as f64 / DEGREE_IN_SECONDS;

        if self.compass.negates() { -decimal } else { decimal }
    }

    /// The minutes component with the seconds folded in as a decimal
    /// fraction, for degrees/decimal-minutes renderings.
    pub fn as_decimal_minutes(&self) -> f64 {
        self.minutes as f64 + self.seconds as f64 / DEGREE_IN_MINUTES
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {}' {}\" {}",
            self.degrees, self.minutes, self.seconds, self.compass
        )
    }
}

/// Split a decimal angle into whole degrees, arc-minutes and
/// arc-seconds, truncating toward zero at each step
///
/// Minutes and seconds are returned as absolute values; the sign of the
/// angle survives in the degrees component (and in the caller's choice
/// of compass point).
fn split_decimal(decimal: f64) -> (i32, u32, u32) {
    let degrees = decimal.trunc();
    let fraction = decimal - degrees;
    let minutes = (fraction * DEGREE_IN_MINUTES).trunc();
    let seconds = ((fraction - minutes / DEGREE_IN_MINUTES) * DEGREE_IN_SECONDS).trunc();

    (degrees as i32, minutes.abs() as u32, seconds.abs() as u32)
}
