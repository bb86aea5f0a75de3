//! Astronomical calculations for miqat.
//!
//! Julian Day conversion, low-precision solar position, prayer angle
//! solvers and Qibla bearing. Everything here is a pure function.

pub mod julian;
pub mod qibla;
pub mod solar;
pub mod solver;

pub use julian::{julian_day, julian_day_for, J2000};
pub use qibla::{compass_point, qibla_bearing, qibla_distance_km, KAABA};
pub use solar::{equation_of_time, solar_declination, SolarPosition};
pub use solver::{asr_altitude, asr_time, solar_noon, time_for_zenith, Direction, SolarTime, SUNRISE_ZENITH};

#[cfg(test)]
mod tests {
    use super::*;
    use miqat_types::GeoCoordinate;
    use proptest::prelude::*;

    proptest! {
        /// Invariant: bearing is always within [0, 360), poles and antimeridian included.
        #[test]
        fn qibla_bearing_normalized(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let b = qibla_bearing(GeoCoordinate::new_unchecked(lat, lng));
            prop_assert!((0.0..360.0).contains(&b), "bearing {} for ({}, {})", b, lat, lng);
        }

        /// Invariant: solvers never produce NaN hours.
        #[test]
        fn solver_never_nan(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0, day in 0u32..366, zenith in 90.0f64..110.0) {
            let sun = SolarPosition::at(julian_day(2024, 1, 1) + day as f64);
            let coords = GeoCoordinate::new_unchecked(lat, lng);
            for direction in [Direction::Rising, Direction::Setting] {
                if let SolarTime::Solved(h) = time_for_zenith(&sun, coords, zenith, direction) {
                    prop_assert!(h.is_finite());
                }
            }
            if let SolarTime::Solved(h) = asr_time(&sun, coords, 2.0) {
                prop_assert!(h.is_finite());
            }
        }
    }
}
