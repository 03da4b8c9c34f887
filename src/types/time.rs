use crate::error::{Error, Result};
use std::fmt;

/// A duration of travel, stored as a whole number of seconds
///
/// Minute and hour views are plain quotients of the stored seconds,
/// never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time {
    seconds: i64,
}

impl Time {
    /// Create a time from a whole number of seconds
    ///
    /// Fails if `seconds` is zero or negative.
    pub fn new(seconds: i64) -> Result<Self> {
        if seconds < 1 {
            return Err(Error::NonPositiveTime(seconds));
        }
        Ok(Self { seconds })
    }

    pub fn in_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn in_minutes(&self) -> f64 {
        self.seconds as f64 / 60.0
    }

    pub fn in_hours(&self) -> f64 {
        self.seconds as f64 / 3600.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time: {} seconds", self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn accepts_positive_seconds() {
        let time = assert_ok!(Time::new(200));
        assert_eq!(time.in_seconds(), 200);
    }

    #[test]
    fn rejects_zero() {
        let err = assert_err!(Time::new(0));
        assert!(matches!(err, Error::NonPositiveTime(0)));
    }

    #[test]
    fn rejects_negative_seconds() {
        let err = assert_err!(Time::new(-20));
        assert!(matches!(err, Error::NonPositiveTime(-20)));
    }

    #[test]
    fn converts_to_minutes() {
        let time = Time::new(60).unwrap();
        assert_eq!(time.in_minutes(), 1.0);
    }

    #[test]
    fn converts_to_hours() {
        let time = Time::new(5400).unwrap();
        assert_eq!(time.in_hours(), 1.5);
    }

    #[test]
    fn display() {
        assert_eq!(Time::new(7200).unwrap().to_string(), "Time: 7200 seconds");
    }
}
