//! Calculation settings, requests and the validating request builder.

use chrono::NaiveDate;
use miqat_types::{CalculationMethod, GeoCoordinate, Madhab, MiqatError, MAX_UTC_OFFSET_MINUTES};
use serde::{Deserialize, Deserializer, Serialize};

/// User preferences that drive a calculation, as kept by settings storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculationSettings {
    /// Unknown codes fall back to MWL.
    #[serde(deserialize_with = "method_or_default")]
    pub method: CalculationMethod,
    pub madhab: Madhab,
    #[serde(rename = "use12HourFormat")]
    pub use_12_hour_clock: bool,
    /// Fixed offset of the local clock from UT, in minutes.
    pub utc_offset_minutes: i32,
}

impl Default for CalculationSettings {
    fn default() -> Self {
        Self {
            method: CalculationMethod::default(),
            madhab: Madhab::default(),
            use_12_hour_clock: true,
            utc_offset_minutes: 0,
        }
    }
}

impl CalculationSettings {
    /// Loads settings from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// `InvalidConfiguration` if the JSON is malformed or the offset is out of range.
    pub fn from_json(json: &str) -> Result<Self, MiqatError> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| MiqatError::invalid_config(format!("Bad settings JSON: {}", e)))?;
        check_offset(settings.utc_offset_minutes)?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, MiqatError> {
        serde_json::to_string(self)
            .map_err(|e| MiqatError::invalid_config(format!("Cannot serialize settings: {}", e)))
    }

    /// Binds these settings to a place and date.
    pub fn request(&self, coordinate: GeoCoordinate, date: NaiveDate) -> CalculationRequest {
        CalculationRequest {
            coordinate,
            date,
            method: self.method,
            madhab: self.madhab,
            use_12_hour_clock: self.use_12_hour_clock,
            utc_offset_minutes: self.utc_offset_minutes,
        }
    }
}

fn method_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CalculationMethod, D::Error> {
    let code = String::deserialize(deserializer)?;
    Ok(code.parse().unwrap_or_else(|_| {
        log::debug!("Unknown calculation method {:?}, using {}", code, CalculationMethod::Mwl);
        CalculationMethod::Mwl
    }))
}

fn check_offset(minutes: i32) -> Result<(), MiqatError> {
    if minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(MiqatError::invalid_config(format!(
            "UTC offset {} min outside [-{max}, {max}]", minutes, max = MAX_UTC_OFFSET_MINUTES
        )));
    }
    Ok(())
}

/// Inputs of one prayer-time calculation.
///
/// Serialize-only: JSON input goes through `CalculationSettings::from_json`,
/// which validates the offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationRequest {
    pub coordinate: GeoCoordinate,
    pub date: NaiveDate,
    pub method: CalculationMethod,
    pub madhab: Madhab,
    pub use_12_hour_clock: bool,
    /// Fixed offset of the local clock from UT, in minutes. Clamped to ±14 h.
    pub utc_offset_minutes: i32,
}

impl CalculationRequest {
    pub fn new(coordinate: GeoCoordinate, date: NaiveDate) -> Self {
        CalculationSettings::default().request(coordinate, date)
    }

    pub fn method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = madhab;
        self
    }

    pub fn use_12_hour_clock(mut self, enabled: bool) -> Self {
        self.use_12_hour_clock = enabled;
        self
    }

    pub fn utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes.clamp(-MAX_UTC_OFFSET_MINUTES, MAX_UTC_OFFSET_MINUTES);
        self
    }

    /// The same request for another date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn settings(&self) -> CalculationSettings {
        CalculationSettings {
            method: self.method,
            madhab: self.madhab,
            use_12_hour_clock: self.use_12_hour_clock,
            utc_offset_minutes: self.utc_offset_minutes,
        }
    }
}

/// Builder with validation for `CalculationRequest`.
#[derive(Debug, Default)]
pub struct CalculationRequestBuilder {
    coordinate: Option<(f64, f64)>,
    date: Option<(i32, u32, u32)>,
    method: Option<CalculationMethod>,
    madhab: Option<Madhab>,
    use_12_hour_clock: Option<bool>,
    utc_offset_minutes: Option<i32>,
}

impl CalculationRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coordinate(mut self, lat: f64, lng: f64) -> Self {
        self.coordinate = Some((lat, lng));
        self
    }

    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = Some((year, month, day));
        self
    }

    pub fn method(mut self, method: CalculationMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = Some(madhab);
        self
    }

    pub fn use_12_hour_clock(mut self, enabled: bool) -> Self {
        self.use_12_hour_clock = Some(enabled);
        self
    }

    pub fn utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = Some(minutes);
        self
    }

    /// Builds and validates.
    ///
    /// # Errors
    /// - `MissingCoordinate` if no coordinate was given
    /// - `InvalidCoordinate` for out-of-range latitude/longitude
    /// - `InvalidDate` for a missing or impossible date
    /// - `InvalidConfiguration` for an offset beyond ±14 h
    pub fn build(self) -> Result<CalculationRequest, MiqatError> {
        let (lat, lng) = self
            .coordinate
            .ok_or_else(|| MiqatError::missing_coordinate("", ""))?;
        let coordinate = GeoCoordinate::new(lat, lng)?;

        let (year, month, day) = self.date.unwrap_or((0, 0, 0));
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(MiqatError::InvalidDate { year, month, day })?;

        let offset = self.utc_offset_minutes.unwrap_or(0);
        check_offset(offset)?;

        let defaults = CalculationSettings::default();
        Ok(CalculationRequest {
            coordinate,
            date,
            method: self.method.unwrap_or(defaults.method),
            madhab: self.madhab.unwrap_or(defaults.madhab),
            use_12_hour_clock: self.use_12_hour_clock.unwrap_or(defaults.use_12_hour_clock),
            utc_offset_minutes: offset,
        })
    }
}
