use crate::geodesy;
use crate::types::{Coordinate, Distance};
use std::fmt;

/// A single point on the Earth's surface: a latitude and a longitude
///
/// The two coordinates are taken as given; there is no cross-validation
/// between them beyond their types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Waypoint {
    latitude: Coordinate,
    longitude: Coordinate,
}

impl Waypoint {
    pub fn new(latitude: Coordinate, longitude: Coordinate) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> Coordinate {
        self.latitude
    }

    pub fn longitude(&self) -> Coordinate {
        self.longitude
    }

    /// Great-circle distance between two waypoints
    ///
    /// A pure function of the two decimal positions, commutative in its
    /// arguments.
    pub fn distance_between(a: &Waypoint, b: &Waypoint) -> Distance {
        let nautical_miles = geodesy::haversine_nm(
            a.latitude.as_decimal(),
            a.longitude.as_decimal(),
            b.latitude.as_decimal(),
            b.longitude.as_decimal(),
        );
        Distance::from_great_circle(nautical_miles)
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latitude: {}, Longitude: {}",
            self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Compass;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn waypoint(lat: (i32, u32, u32, Compass), lon: (i32, u32, u32, Compass)) -> Waypoint {
        Waypoint::new(
            Coordinate::new(lat.0, lat.1, lat.2, lat.3),
            Coordinate::new(lon.0, lon.1, lon.2, lon.3),
        )
    }

    #[test]
    fn exposes_its_coordinates() {
        let latitude = Coordinate::new(56, 42, 10, Compass::South);
        let longitude = Coordinate::new(2, 5, 19, Compass::West);
        let wpt = Waypoint::new(latitude, longitude);
        assert_eq!(wpt.latitude(), latitude);
        assert_eq!(wpt.longitude(), longitude);
    }

    #[test]
    fn distance_between_two_waypoints() {
        let a = waypoint((56, 42, 10, Compass::South), (2, 5, 19, Compass::West));
        let b = waypoint((56, 50, 10, Compass::South), (2, 6, 19, Compass::West));

        let distance = Waypoint::distance_between(&a, &b);
        assert_abs_diff_eq!(distance.in_nautical_miles(), 8.033, epsilon = 1e-3);
    }

    #[test]
    fn distance_between_a_waypoint_and_itself_is_zero() {
        let a = waypoint((56, 42, 10, Compass::North), (2, 5, 19, Compass::West));
        assert_eq!(Waypoint::distance_between(&a, &a).in_nautical_miles(), 0.0);
    }

    #[test]
    fn display() {
        let wpt = waypoint((56, 42, 10, Compass::North), (2, 5, 19, Compass::West));
        insta::assert_snapshot!(
            wpt.to_string(),
            @r#"Latitude: 56° 42' 10" N, Longitude: 2° 5' 19" W"#
        );
    }

    proptest! {
        #[test]
        fn prop_distance_between_is_symmetric(
            lat_a in -90.0..=90.0f64,
            lon_a in -180.0..=180.0f64,
            lat_b in -90.0..=90.0f64,
            lon_b in -180.0..=180.0f64,
        ) {
            let a = Waypoint::new(
                Coordinate::latitude_from_decimal(lat_a),
                Coordinate::longitude_from_decimal(lon_a),
            );
            let b = Waypoint::new(
                Coordinate::latitude_from_decimal(lat_b),
                Coordinate::longitude_from_decimal(lon_b),
            );

            let ab = Waypoint::distance_between(&a, &b).in_nautical_miles();
            let ba = Waypoint::distance_between(&b, &a).in_nautical_miles();
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        #[test]
        fn prop_distance_between_is_never_negative(
            lat_a in -90.0..=90.0f64,
            lon_a in -180.0..=180.0f64,
            lat_b in -90.0..=90.0f64,
            lon_b in -180.0..=180.0f64,
        ) {
            let a = Waypoint::new(
                Coordinate::latitude_from_decimal(lat_a),
                Coordinate::longitude_from_decimal(lon_a),
            );
            let b = Waypoint::new(
                Coordinate::latitude_from_decimal(lat_b),
                Coordinate::longitude_from_decimal(lon_b),
            );

            prop_assert!(Waypoint::distance_between(&a, &b).in_nautical_miles() >= 0.0);
        }
    }
}
