//! Spherical-Earth geodesy kernels.
//!
//! # Coordinate system
//!
//! - Latitude: decimal degrees north (-90 to 90)
//! - Longitude: decimal degrees east (-180 to 180)
//! - Bearing: degrees true (0-360, 0 = north, 90 = east)
//! - Distance: nautical miles or kilometers, as noted per function

/// Earth's radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3443.9184665;

/// Earth's radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Great-circle distance in nautical miles between two positions
///
/// Haversine formula on a spherical Earth. Symmetric in its two
/// endpoints and never negative.
pub fn haversine_nm(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let lat_a_rad = lat_a.to_radians();
    let lat_b_rad = lat_b.to_radians();
    let half_dlat = (lat_a_rad - lat_b_rad) / 2.0;
    let half_dlon = (lon_a.to_radians() - lon_b.to_radians()) / 2.0;

    let a = half_dlat.sin().powi(2) + lat_a_rad.cos() * lat_b_rad.cos() * half_dlon.sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_NM * c
}

/// Destination point reached by travelling `distance_km` from
/// (`lat`, `lon`) along `bearing_deg`
///
/// Solves the direct geodesic problem on a spherical Earth. Returns the
/// destination as (latitude, longitude) in decimal degrees, with the
/// longitude wrapped into [-180, 180).
pub fn destination(lat: f64, lon: f64, bearing_deg: f64, distance_km: f64) -> (f64, f64) {
    let lat_rad = lat.to_radians();
    let bearing_rad = bearing_deg.to_radians();
    let angular_distance = distance_km / EARTH_RADIUS_KM;

    let sin_lat = lat_rad.sin();
    let cos_lat = lat_rad.cos();
    let sin_d = angular_distance.sin();
    let cos_d = angular_distance.cos();

    let end_lat_rad = (sin_lat * cos_d + cos_lat * sin_d * bearing_rad.cos()).asin();
    let end_lon = lon
        + (bearing_rad.sin() * sin_d * cos_lat)
            .atan2(cos_d - sin_lat * end_lat_rad.sin())
            .to_degrees();

    (end_lat_rad.to_degrees(), normalize_longitude(end_lon))
}

/// Wrap a longitude into [-180, 180)
pub fn normalize_longitude(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}
