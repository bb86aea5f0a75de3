//! Low-precision solar position.
//!
//! Single-term perturbation series for the Sun's apparent longitude, good to
//! roughly 0.01° between 1950 and 2050. This is the model used by most
//! prayer-time tables, not an ephemeris.

use crate::julian::J2000;

/// Solar quantities needed for one day of prayer times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Declination in degrees.
    pub declination: f64,
    /// Equation of time in hours (apparent minus mean solar time).
    pub equation_of_time: f64,
}

impl SolarPosition {
    /// Computes declination and equation of time at Julian Day `jd`.
    pub fn at(jd: f64) -> Self {
        let ecliptic = EclipticLongitude::at(jd);
        Self {
            declination: ecliptic.declination(),
            equation_of_time: ecliptic.equation_of_time(),
        }
    }
}

/// Intermediate longitudes shared by declination and equation of time.
struct EclipticLongitude {
    /// Mean longitude, degrees.
    mean: f64,
    /// Apparent longitude, degrees.
    apparent: f64,
    /// Obliquity of the ecliptic, degrees.
    obliquity: f64,
}

impl EclipticLongitude {
    fn at(jd: f64) -> Self {
        let d = jd - J2000;
        let g = (357.529 + 0.985_600_28 * d).rem_euclid(360.0);
        let q = (280.459 + 0.985_647_36 * d).rem_euclid(360.0);
        let apparent = (q + 1.915 * g.to_radians().sin() + 0.020 * (2.0 * g).to_radians().sin())
            .rem_euclid(360.0);
        let obliquity = 23.439 - 0.000_000_36 * d;

        Self { mean: q, apparent, obliquity }
    }

    fn declination(&self) -> f64 {
        (self.obliquity.to_radians().sin() * self.apparent.to_radians().sin())
            .asin()
            .to_degrees()
    }

    fn right_ascension(&self) -> f64 {
        let l = self.apparent.to_radians();
        (self.obliquity.to_radians().cos() * l.sin())
            .atan2(l.cos())
            .to_degrees()
    }

    fn equation_of_time(&self) -> f64 {
        // RA comes out of atan2 in (-180, 180]; fold the difference so it
        // stays a few minutes instead of jumping by a full day.
        let diff = (self.mean - self.right_ascension() + 180.0).rem_euclid(360.0) - 180.0;
        diff / 15.0
    }
}

/// Solar declination in degrees at Julian Day `jd`.
pub fn solar_declination(jd: f64) -> f64 {
    EclipticLongitude::at(jd).declination()
}

/// Equation of time in hours at Julian Day `jd`.
pub fn equation_of_time(jd: f64) -> f64 {
    EclipticLongitude::at(jd).equation_of_time()
}
