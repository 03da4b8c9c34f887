use crate::error::{Error, Result};
use crate::types::{Distance, Speed, Time};

/// Completes a partially known speed/distance/time triple
///
/// Given any two of the three quantities the third is derived at
/// construction; afterwards all three are resolved. The relationships
/// are `distance = speed × time-in-seconds` and `speed = distance /
/// time-in-seconds`, while a derived time is `distance / speed` in
/// hours, scaled to seconds and truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedDistanceTime {
    speed: Speed,
    distance: Distance,
    time: Time,
}

impl SpeedDistanceTime {
    /// Resolve a triple from at least two known quantities
    ///
    /// Omitting two or more of the quantities is an error. When all
    /// three are supplied they are stored as given, without
    /// cross-checking their consistency.
    pub fn new(
        speed: Option<Speed>,
        distance: Option<Distance>,
        time: Option<Time>,
    ) -> Result<Self> {
        match (speed, distance, time) {
            (Some(speed), Some(distance), None) => {
                let time = derive_time(speed, distance)?;
                Ok(Self {
                    speed,
                    distance,
                    time,
                })
            }
            (Some(speed), None, Some(time)) => {
                let distance = derive_distance(speed, time)?;
                Ok(Self {
                    speed,
                    distance,
                    time,
                })
            }
            (None, Some(distance), Some(time)) => {
                let speed = derive_speed(distance, time)?;
                Ok(Self {
                    speed,
                    distance,
                    time,
                })
            }
            (Some(speed), Some(distance), Some(time)) => Ok(Self {
                speed,
                distance,
                time,
            }),
            (None, None, _) | (None, _, None) | (_, None, None) => {
                Err(Error::UnderdeterminedTriple)
            }
        }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn time(&self) -> Time {
        self.time
    }
}

/// Travel time for `distance` at `speed`, truncated to whole seconds
///
/// A quotient that is not representable (zero speed) or truncates below
/// one second fails Time's own validation.
fn derive_time(speed: Speed, distance: Distance) -> Result<Time> {
    let hours = distance.in_nautical_miles() / speed.in_knots();
    let seconds = hours * 3600.0;
    if !seconds.is_finite() {
        return Err(Error::NonFinite {
            quantity: "derived time",
            value: seconds,
        });
    }
    Time::new(seconds.trunc() as i64)
}

fn derive_distance(speed: Speed, time: Time) -> Result<Distance> {
    Distance::new(speed.in_knots() * time.in_seconds() as f64)
}

fn derive_speed(distance: Distance, time: Time) -> Result<Speed> {
    Speed::new(distance.in_nautical_miles() / time.in_seconds() as f64)
}
