//! Calculation methods and their twilight parameters.

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MiqatError;

/// How Isha is derived for a calculation method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IshaRule {
    /// Sun depression angle below the horizon, in degrees.
    Angle(f64),
    /// Fixed number of minutes after Maghrib.
    Interval(u32),
}

/// Twilight parameters of a calculation method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodParameters {
    /// Sun depression angle for Fajr, in degrees (positive, below horizon).
    pub fajr_angle: f64,
    pub isha: IshaRule,
}

impl MethodParameters {
    const fn angles(fajr_angle: f64, isha_angle: f64) -> Self {
        Self { fajr_angle, isha: IshaRule::Angle(isha_angle) }
    }

    const fn interval(fajr_angle: f64, minutes: u32) -> Self {
        Self { fajr_angle, isha: IshaRule::Interval(minutes) }
    }

    /// Isha depression angle, `None` for interval-based methods.
    pub fn isha_angle(&self) -> Option<f64> {
        match self.isha {
            IshaRule::Angle(angle) => Some(angle),
            IshaRule::Interval(_) => None,
        }
    }

    /// Minutes between Maghrib and Isha, `None` for angle-based methods.
    pub fn isha_interval_minutes(&self) -> Option<u32> {
        match self.isha {
            IshaRule::Angle(_) => None,
            IshaRule::Interval(minutes) => Some(minutes),
        }
    }
}

/// Prayer time calculation conventions used by Islamic authorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// Muslim World League.
    #[serde(rename = "MWL")]
    Mwl,
    /// Islamic Society of North America.
    #[serde(rename = "ISNA")]
    Isna,
    /// Egyptian General Authority of Survey.
    Egypt,
    /// Umm Al-Qura University, Makkah.
    Makkah,
    /// University of Islamic Sciences, Karachi.
    Karachi,
    /// Institute of Geophysics, University of Tehran.
    Tehran,
    /// Shia Ithna-Ashari, Leva Institute, Qum.
    Jafari,
    /// Gulf Region.
    Gulf,
    Kuwait,
    Qatar,
    /// Majlis Ugama Islam Singapura.
    Singapore,
    /// Union des Organisations Islamiques de France.
    France,
    /// Diyanet İşleri Başkanlığı.
    Turkey,
    /// Spiritual Administration of Muslims of Russia.
    Russia,
    /// Moonsighting Committee Worldwide.
    Moonsighting,
    /// Dubai (unofficial, 18.2°).
    Dubai,
    /// Jabatan Kemajuan Islam Malaysia.
    #[serde(rename = "JAKIM")]
    Jakim,
    Tunisia,
    Algeria,
    /// Kementerian Agama Republik Indonesia.
    #[serde(rename = "KEMENAG")]
    Kemenag,
    Morocco,
    /// Comunidade Islâmica de Lisboa.
    Portugal,
}

impl Default for CalculationMethod {
    fn default() -> Self {
        Self::Mwl
    }
}

impl CalculationMethod {
    /// Every method, in table order.
    pub const ALL: [CalculationMethod; 22] = [
        Self::Mwl, Self::Isna, Self::Egypt, Self::Makkah, Self::Karachi, Self::Tehran,
        Self::Jafari, Self::Gulf, Self::Kuwait, Self::Qatar, Self::Singapore, Self::France,
        Self::Turkey, Self::Russia, Self::Moonsighting, Self::Dubai, Self::Jakim,
        Self::Tunisia, Self::Algeria, Self::Kemenag, Self::Morocco, Self::Portugal,
    ];

    /// Fajr/Isha parameters for this method.
    pub const fn parameters(self) -> MethodParameters {
        match self {
            Self::Mwl => MethodParameters::angles(18.0, 17.0),
            Self::Isna => MethodParameters::angles(15.0, 15.0),
            Self::Egypt => MethodParameters::angles(19.5, 17.5),
            Self::Makkah => MethodParameters::interval(18.5, 90),
            Self::Karachi => MethodParameters::angles(18.0, 18.0),
            Self::Tehran => MethodParameters::angles(17.7, 14.0),
            Self::Jafari => MethodParameters::angles(16.0, 14.0),
            Self::Gulf => MethodParameters::interval(19.5, 90),
            Self::Kuwait => MethodParameters::angles(18.0, 17.5),
            Self::Qatar => MethodParameters::interval(18.0, 90),
            Self::Singapore => MethodParameters::angles(20.0, 18.0),
            Self::France => MethodParameters::angles(12.0, 12.0),
            Self::Turkey => MethodParameters::angles(18.0, 17.0),
            Self::Russia => MethodParameters::angles(16.0, 15.0),
            Self::Moonsighting => MethodParameters::angles(18.0, 18.0),
            Self::Dubai => MethodParameters::angles(18.2, 18.2),
            Self::Jakim => MethodParameters::angles(20.0, 18.0),
            Self::Tunisia => MethodParameters::angles(18.0, 18.0),
            Self::Algeria => MethodParameters::angles(18.0, 17.0),
            Self::Kemenag => MethodParameters::angles(20.0, 18.0),
            Self::Morocco => MethodParameters::angles(19.0, 17.0),
            Self::Portugal => MethodParameters::angles(18.0, 17.0),
        }
    }

    /// Short code used in settings storage (e.g. `"MWL"`, `"Egypt"`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Mwl => "MWL",
            Self::Isna => "ISNA",
            Self::Egypt => "Egypt",
            Self::Makkah => "Makkah",
            Self::Karachi => "Karachi",
            Self::Tehran => "Tehran",
            Self::Jafari => "Jafari",
            Self::Gulf => "Gulf",
            Self::Kuwait => "Kuwait",
            Self::Qatar => "Qatar",
            Self::Singapore => "Singapore",
            Self::France => "France",
            Self::Turkey => "Turkey",
            Self::Russia => "Russia",
            Self::Moonsighting => "Moonsighting",
            Self::Dubai => "Dubai",
            Self::Jakim => "JAKIM",
            Self::Tunisia => "Tunisia",
            Self::Algeria => "Algeria",
            Self::Kemenag => "KEMENAG",
            Self::Morocco => "Morocco",
            Self::Portugal => "Portugal",
        }
    }

    /// Numeric method id of the common prayer-times web API scheme.
    pub const fn api_id(self) -> u8 {
        match self {
            Self::Jafari => 0,
            Self::Karachi => 1,
            Self::Isna => 2,
            Self::Mwl => 3,
            Self::Makkah => 4,
            Self::Egypt => 5,
            Self::Tehran => 7,
            Self::Gulf => 8,
            Self::Kuwait => 9,
            Self::Qatar => 10,
            Self::Singapore => 11,
            Self::France => 12,
            Self::Turkey => 13,
            Self::Russia => 14,
            Self::Moonsighting => 15,
            Self::Dubai => 16,
            Self::Jakim => 17,
            Self::Tunisia => 18,
            Self::Algeria => 19,
            Self::Kemenag => 20,
            Self::Morocco => 21,
            Self::Portugal => 22,
        }
    }

    /// Parses a method code, falling back to MWL for unknown codes.
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl FromStr for CalculationMethod {
    type Err = MiqatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MiqatError::UnknownMethod(s.to_string()))
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
