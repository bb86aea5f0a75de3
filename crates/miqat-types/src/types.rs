use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MiqatError;

/// The four major Sunni schools of jurisprudence.
///
/// Only the Asr rule differs between them here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Madhab {
    Shafi,
    Hanafi,
    Maliki,
    Hanbali,
}

impl Default for Madhab {
    fn default() -> Self {
        Self::Shafi
    }
}

impl Madhab {
    pub const ALL: [Madhab; 4] = [Self::Shafi, Self::Hanafi, Self::Maliki, Self::Hanbali];

    /// Shadow length, in object heights, that marks the start of Asr.
    pub const fn shadow_factor(self) -> f64 {
        match self {
            Self::Hanafi => 2.0,
            Self::Shafi | Self::Maliki | Self::Hanbali => 1.0,
        }
    }

    /// School id of the common prayer-times web API scheme (0 standard, 1 Hanafi).
    pub const fn school_id(self) -> u8 {
        match self {
            Self::Hanafi => 1,
            Self::Shafi | Self::Maliki | Self::Hanbali => 0,
        }
    }
}

impl FromStr for Madhab {
    type Err = MiqatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MiqatError::UnknownMadhab(s.to_string()))
    }
}

impl fmt::Display for Madhab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Madhab::Shafi => "Shafi",
            Madhab::Hanafi => "Hanafi",
            Madhab::Maliki => "Maliki",
            Madhab::Hanbali => "Hanbali",
        };
        write!(f, "{}", s)
    }
}

/// Daily prayer events, in chronological order.
///
/// Sunrise is not a prayer; it is emitted so callers can show it and then
/// filter it out of countdowns and notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub const ALL: [PrayerName; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// False only for Sunrise.
    pub fn is_prayer(&self) -> bool {
        !matches!(self, PrayerName::Sunrise)
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        };
        write!(f, "{}", s)
    }
}

/// Geographic position in degrees (north and east positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate, rejecting latitude outside [-90, 90] and
    /// longitude outside [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, MiqatError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(MiqatError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Creates a coordinate without range checks.
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A saved place as supplied by settings storage.
///
/// Coordinates are optional there; geocoding a city name is not done here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Location {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Returns the coordinate, failing with `MissingCoordinate` if either
    /// component is absent.
    pub fn coordinate(&self) -> Result<GeoCoordinate, MiqatError> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => GeoCoordinate::new(lat, lng),
            _ => Err(MiqatError::missing_coordinate(&self.city, &self.country)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_factor() {
        assert_eq!(Madhab::Hanafi.shadow_factor(), 2.0);
        for m in [Madhab::Shafi, Madhab::Maliki, Madhab::Hanbali] {
            assert_eq!(m.shadow_factor(), 1.0);
            assert_eq!(m.school_id(), 0);
        }
        assert_eq!(Madhab::Hanafi.school_id(), 1);
    }

    #[test]
    fn test_madhab_parse() {
        assert_eq!("hanafi".parse::<Madhab>().unwrap(), Madhab::Hanafi);
        assert!(" Maliki ".parse::<Madhab>().is_ok());
        assert!("Zahiri".parse::<Madhab>().is_err());
    }

    #[test]
    fn test_prayer_order() {
        let mut sorted = PrayerName::ALL;
        sorted.sort();
        assert_eq!(sorted, PrayerName::ALL);
        assert!(!PrayerName::Sunrise.is_prayer());
        assert_eq!(PrayerName::ALL.iter().filter(|p| p.is_prayer()).count(), 5);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(GeoCoordinate::new(51.5074, -0.1278).is_ok());
        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(matches!(GeoCoordinate::new(91.0, 0.0), Err(MiqatError::InvalidCoordinate { .. })));
        assert!(GeoCoordinate::new(0.0, -180.5).is_err());
        assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_location_missing_coordinate() {
        let loc = Location::new("Cairo", "Egypt");
        assert!(matches!(loc.coordinate(), Err(MiqatError::MissingCoordinate { .. })));

        let loc = loc.with_coordinates(30.0444, 31.2357);
        assert_eq!(loc.coordinate().unwrap(), GeoCoordinate::new_unchecked(30.0444, 31.2357));
    }
}
