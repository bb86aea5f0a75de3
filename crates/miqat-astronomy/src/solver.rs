//! Hour-angle solvers for prayer times.
//!
//! All times are fractional hours of Universal Time on the requested date.
//! Converting to a local clock is left to the caller.

use miqat_types::GeoCoordinate;
use crate::solar::SolarPosition;

/// Zenith angle of sunrise and sunset: horizon plus 34' refraction and 16'
/// solar semidiameter.
pub const SUNRISE_ZENITH: f64 = 90.833;

/// Which side of solar noon an event falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Before noon (Fajr, Sunrise).
    Rising,
    /// After noon (Asr, Maghrib, Isha).
    Setting,
}

/// Outcome of solving for the time the Sun reaches an altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarTime {
    /// Fractional UT hours.
    Solved(f64),
    /// The Sun never reaches the altitude on this day (polar day or night).
    Unsolvable {
        /// The out-of-range hour-angle cosine, kept for diagnostics.
        cos_h: f64,
    },
}

impl SolarTime {
    pub fn hours(self) -> Option<f64> {
        match self {
            SolarTime::Solved(h) => Some(h),
            SolarTime::Unsolvable { .. } => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SolarTime::Solved(_))
    }
}

/// Solar noon in fractional UT hours.
pub fn solar_noon(longitude: f64, equation_of_time: f64) -> f64 {
    12.0 - longitude / 15.0 - equation_of_time
}

fn cos_hour_angle(altitude: f64, latitude: f64, declination: f64) -> f64 {
    let (alt, lat, decl) = (altitude.to_radians(), latitude.to_radians(), declination.to_radians());
    (alt.sin() - decl.sin() * lat.sin()) / (decl.cos() * lat.cos())
}

/// Hour angle, in hours, at which the Sun stands at `altitude` degrees.
fn hour_angle(altitude: f64, latitude: f64, declination: f64) -> Result<f64, f64> {
    let cos_h = cos_hour_angle(altitude, latitude, declination);

    // NaN (cos(lat) == 0 at the poles) also lands here.
    if !(-1.0..=1.0).contains(&cos_h) {
        return Err(cos_h);
    }
    Ok(cos_h.acos().to_degrees() / 15.0)
}

fn solve_altitude(
    sun: &SolarPosition,
    coords: GeoCoordinate,
    altitude: f64,
    direction: Direction,
) -> SolarTime {
    match hour_angle(altitude, coords.lat, sun.declination) {
        Ok(h) => {
            let noon = solar_noon(coords.lng, sun.equation_of_time);
            SolarTime::Solved(match direction {
                Direction::Rising => noon - h,
                Direction::Setting => noon + h,
            })
        }
        Err(cos_h) => SolarTime::Unsolvable { cos_h },
    }
}

/// Finds when the Sun crosses `zenith` degrees on the given side of noon.
///
/// # Example
/// ```rust
/// use miqat_astronomy::{julian_day, SolarPosition, time_for_zenith, Direction, SUNRISE_ZENITH};
/// use miqat_types::GeoCoordinate;
///
/// let sun = SolarPosition::at(julian_day(2024, 3, 15));
/// let jakarta = GeoCoordinate::new_unchecked(-6.2088, 106.8456);
/// let sunrise = time_for_zenith(&sun, jakarta, SUNRISE_ZENITH, Direction::Rising);
/// assert!(sunrise.is_solved());
/// ```
pub fn time_for_zenith(
    sun: &SolarPosition,
    coords: GeoCoordinate,
    zenith: f64,
    direction: Direction,
) -> SolarTime {
    solve_altitude(sun, coords, 90.0 - zenith, direction)
}

/// Solar altitude, in degrees, at which an object's shadow equals
/// `shadow_factor` times its height plus its noon shadow.
pub fn asr_altitude(latitude: f64, declination: f64, shadow_factor: f64) -> f64 {
    let noon_shadow = (latitude - declination).abs().to_radians().tan();
    (1.0 / (shadow_factor + noon_shadow)).atan().to_degrees()
}

/// Finds the start of Asr for the given shadow factor.
///
/// Unsolvable when the Sun stays below the horizon at noon, since the noon
/// shadow is then unbounded.
pub fn asr_time(sun: &SolarPosition, coords: GeoCoordinate, shadow_factor: f64) -> SolarTime {
    let altitude = asr_altitude(coords.lat, sun.declination, shadow_factor);
    if (coords.lat - sun.declination).abs() >= 90.0 || altitude.is_nan() || altitude <= 0.0 {
        return SolarTime::Unsolvable { cos_h: cos_hour_angle(altitude, coords.lat, sun.declination) };
    }
    solve_altitude(sun, coords, altitude, Direction::Setting)
}
