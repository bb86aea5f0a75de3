//! WASM bindings for Miqat - prayer times and Qibla engine
//!
//! Provides WebAssembly bindings for computing the daily prayer schedule
//! and the Qibla bearing of a location.

use wasm_bindgen::prelude::*;
use miqat_core::{
    calculate, qibla_bearing as bearing_to_kaaba, CalculationMethod, CalculationRequest, DailyResult,
    GeoCoordinate, Madhab, NextPrayer, PrayerTimeResult,
};
use serde::Serialize;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_date(date_str: &str) -> Result<chrono::NaiveDate, JsValue> {
    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date format: {}", e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(js_err)
}

/// Computes the prayer schedule for a date string (YYYY-MM-DD).
///
/// Unknown method codes fall back to MWL; unknown madhab codes are an error.
///
/// # Example (JavaScript)
/// ```js
/// const day = compute(51.5074, -0.1278, "2024-12-21", "MWL", "Shafi", false, 0);
/// console.log(day.prayers[0].formatted); // "05:59"
/// ```
#[wasm_bindgen]
pub fn compute(
    lat: f64,
    lng: f64,
    date_str: &str,
    method_code: &str,
    madhab_code: &str,
    use_12h: bool,
    utc_offset_minutes: i32,
) -> Result<JsValue, JsValue> {
    let coordinate = GeoCoordinate::new(lat, lng).map_err(js_err)?;
    let date = parse_date(date_str)?;
    let madhab: Madhab = madhab_code.parse().map_err(js_err)?;

    let request = CalculationRequest::new(coordinate, date)
        .method(CalculationMethod::from_code_or_default(method_code))
        .madhab(madhab)
        .use_12_hour_clock(use_12h)
        .utc_offset_minutes(utc_offset_minutes);

    to_js(&WasmDailyResult::from(calculate(&request)))
}

/// Initial great-circle bearing to the Kaaba in degrees clockwise from north.
#[wasm_bindgen(js_name = qiblaBearing)]
pub fn qibla_bearing(lat: f64, lng: f64) -> Result<f64, JsValue> {
    let coordinate = GeoCoordinate::new(lat, lng).map_err(js_err)?;
    Ok(bearing_to_kaaba(coordinate))
}

/// Class-based API bound to one location and settings.
///
/// # Example (JavaScript)
/// ```js
/// const miqat = new Miqat(21.4225, 39.8262, "Makkah", "Shafi", false, 180);
/// const today = miqat.day("2025-03-01");
/// const next = miqat.nextPrayer("2025-03-01", Date.now());
/// ```
#[wasm_bindgen]
pub struct Miqat {
    request: CalculationRequest,
}

#[wasm_bindgen]
impl Miqat {
    /// Creates a calculator for the given location and settings.
    #[wasm_bindgen(constructor)]
    pub fn new(
        lat: f64,
        lng: f64,
        method_code: &str,
        madhab_code: &str,
        use_12h: bool,
        utc_offset_minutes: i32,
    ) -> Result<Miqat, JsValue> {
        console_error_panic_hook::set_once();
        let coordinate = GeoCoordinate::new(lat, lng).map_err(js_err)?;
        let madhab: Madhab = madhab_code.parse().map_err(js_err)?;
        let request = CalculationRequest::new(coordinate, chrono::NaiveDate::default())
            .method(CalculationMethod::from_code_or_default(method_code))
            .madhab(madhab)
            .use_12_hour_clock(use_12h)
            .utc_offset_minutes(utc_offset_minutes);
        Ok(Miqat { request })
    }

    /// Returns the prayer schedule for a date string (YYYY-MM-DD).
    pub fn day(&self, date_str: &str) -> Result<JsValue, JsValue> {
        let date = parse_date(date_str)?;
        to_js(&WasmDailyResult::from(calculate(&self.request.on(date))))
    }

    /// Returns the next obligatory prayer after `now_ms`, or `undefined`
    /// once Isha of that date has begun.
    #[wasm_bindgen(js_name = nextPrayer)]
    pub fn next_prayer(&self, date_str: &str, now_ms: f64) -> Result<JsValue, JsValue> {
        let date = parse_date(date_str)?;
        let day = calculate(&self.request.on(date));
        match day.next_prayer(now_ms as i64) {
            Some(next) => to_js(&WasmNextPrayer::from(next)),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Qibla bearing for this calculator's location.
    #[wasm_bindgen(getter)]
    pub fn qibla(&self) -> f64 {
        bearing_to_kaaba(self.request.coordinate)
    }

    /// Canonical code of the configured method.
    #[wasm_bindgen(getter)]
    pub fn method(&self) -> String {
        self.request.method.code().to_string()
    }
}

/// WASM-friendly representation of one prayer time.
#[derive(Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmPrayerTime {
    pub name: String,
    pub timestamp: f64,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub formatted: String,
    pub estimated: bool,
}

impl From<&PrayerTimeResult> for WasmPrayerTime {
    fn from(p: &PrayerTimeResult) -> Self {
        Self {
            name: p.name.to_string(),
            timestamp: p.timestamp as f64,
            hour: p.hour,
            minute: p.minute,
            second: p.second,
            formatted: p.formatted.clone(),
            estimated: p.estimated,
        }
    }
}

/// WASM-friendly representation of DailyResult for TypeScript generation.
#[derive(Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmDailyResult {
    pub date: String,
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset_minutes: i32,
    pub prayers: Vec<WasmPrayerTime>,
    pub qibla_bearing: f64,
    pub estimated: Vec<String>,
}

impl From<DailyResult> for WasmDailyResult {
    fn from(day: DailyResult) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            latitude: day.coordinate.lat,
            longitude: day.coordinate.lng,
            utc_offset_minutes: day.utc_offset_minutes,
            prayers: day.prayers.iter().map(WasmPrayerTime::from).collect(),
            qibla_bearing: day.qibla_bearing,
            estimated: day.estimated_prayers().iter().map(|n| n.to_string()).collect(),
        }
    }
}

#[derive(Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmNextPrayer {
    pub prayer: WasmPrayerTime,
    pub total_seconds: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl From<NextPrayer> for WasmNextPrayer {
    fn from(next: NextPrayer) -> Self {
        Self {
            prayer: WasmPrayerTime::from(&next.prayer),
            total_seconds: next.countdown.total_seconds as f64,
            hours: next.countdown.hours as f64,
            minutes: next.countdown.minutes as f64,
            seconds: next.countdown.seconds as f64,
        }
    }
}
