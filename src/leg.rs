use crate::geodesy;
use crate::solver::SpeedDistanceTime;
use crate::types::{CompassBearing, Coordinate, Distance, Speed, Time, Waypoint};
use std::fmt;

/// A single directed segment of travel
///
/// Owns a start waypoint, a bearing, and a resolved speed/distance/time
/// triple. The end waypoint is derived exactly once at construction by
/// projecting the start along the bearing for the leg distance, and is
/// never recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    sdt: SpeedDistanceTime,
    start_waypoint: Waypoint,
    bearing: CompassBearing,
    end_waypoint: Waypoint,
}

impl Leg {
    pub fn new(sdt: SpeedDistanceTime, start_waypoint: Waypoint, bearing: CompassBearing) -> Self {
        let (end_lat, end_lon) = geodesy::destination(
            start_waypoint.latitude().as_decimal(),
            start_waypoint.longitude().as_decimal(),
            bearing.degrees() as f64,
            sdt.distance().in_km(),
        );
        let end_waypoint = Waypoint::new(
            Coordinate::latitude_from_decimal(end_lat),
            Coordinate::longitude_from_decimal(end_lon),
        );

        Self {
            sdt,
            start_waypoint,
            bearing,
            end_waypoint,
        }
    }

    pub fn start_waypoint(&self) -> Waypoint {
        self.start_waypoint
    }

    pub fn end_waypoint(&self) -> Waypoint {
        self.end_waypoint
    }

    pub fn bearing(&self) -> CompassBearing {
        self.bearing
    }

    /// The reciprocal of the leg's bearing
    pub fn reverse_bearing(&self) -> CompassBearing {
        self.bearing.reciprocal()
    }

    pub fn speed(&self) -> Speed {
        self.sdt.speed()
    }

    pub fn distance(&self) -> Distance {
        self.sdt.distance()
    }

    pub fn time(&self) -> Time {
        self.sdt.time()
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.bearing)?;
        writeln!(f, "{}", self.sdt.speed())?;
        writeln!(f, "{}", self.sdt.distance())?;
        writeln!(f, "{}", self.sdt.time())?;
        writeln!(f, "Start Waypoint: {}", self.start_waypoint)?;
        writeln!(f, "End Waypoint: {}", self.end_waypoint)
    }
}
