//! Qibla direction by great-circle initial bearing.

use miqat_types::GeoCoordinate;

/// Coordinates of the Kaaba in Mecca.
pub const KAABA: GeoCoordinate = GeoCoordinate::new_unchecked(21.4225, 39.8262);

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE",
    "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
];

/// Bearing from true north towards the Kaaba, in degrees within [0, 360),
/// rounded to one decimal.
///
/// At the Kaaba itself the bearing is undefined; the formula yields 0.
pub fn qibla_bearing(coords: GeoCoordinate) -> f64 {
    let lat1 = coords.lat.to_radians();
    let lat2 = KAABA.lat.to_radians();
    let d_lon = (KAABA.lng - coords.lng).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
    let rounded = (bearing * 10.0).round() / 10.0;
    // 359.96 rounds up to 360.0.
    if rounded >= 360.0 { 0.0 } else { rounded }
}

/// Great-circle distance to the Kaaba in kilometres (haversine).
pub fn qibla_distance_km(coords: GeoCoordinate) -> f64 {
    let lat1 = coords.lat.to_radians();
    let lat2 = KAABA.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (KAABA.lng - coords.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Sixteen-wind compass name for a bearing in degrees.
pub fn compass_point(bearing: f64) -> &'static str {
    let index = (bearing.rem_euclid(360.0) / 22.5).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}
