//! Prayer times orchestration.
//!
//! Computes the six daily times and the Qibla bearing from a
//! `CalculationRequest`. Stateless: identical requests give identical results.

use chrono::{NaiveDate, NaiveTime};
use miqat_astronomy::{
    asr_time, julian_day_for, qibla_bearing, solar_noon, time_for_zenith, Direction,
    SolarPosition, SolarTime, SUNRISE_ZENITH,
};
use miqat_types::{CalculationMethod, GeoCoordinate, IshaRule, Location, Madhab, MiqatError, PrayerName};

use crate::format::format_clock;
use crate::request::{CalculationRequest, CalculationSettings};
use crate::result::{DailyResult, PrayerTimeResult};

const SECONDS_PER_DAY: i64 = 86_400;
/// Local clock hour used when Asr cannot be solved.
const ASR_FALLBACK_HOUR: f64 = 15.0;

/// A time of day before local clock conversion.
#[derive(Debug, Clone, Copy)]
struct RawTime {
    /// Fractional UT hours.
    ut_hours: f64,
    estimated: bool,
}

impl RawTime {
    fn solved(ut_hours: f64) -> Self {
        Self { ut_hours, estimated: false }
    }

    fn fallback(ut_hours: f64) -> Self {
        Self { ut_hours, estimated: true }
    }
}

/// Clock conversion shared by all six times of one request.
struct LocalClock {
    day_start_ms: i64,
    offset_minutes: i32,
    use_12_hour_clock: bool,
}

impl LocalClock {
    fn new(request: &CalculationRequest) -> Self {
        Self {
            day_start_ms: request.date.and_time(NaiveTime::MIN).and_utc().timestamp_millis(),
            offset_minutes: request.utc_offset_minutes,
            use_12_hour_clock: request.use_12_hour_clock,
        }
    }

    /// Whole seconds after local midnight, wrapped onto the request date.
    fn local_seconds(&self, ut_hours: f64) -> i64 {
        let ut_seconds = (ut_hours * 3600.0).floor() as i64;
        (ut_seconds + self.offset_minutes as i64 * 60).rem_euclid(SECONDS_PER_DAY)
    }

    /// Builds a result from seconds after local midnight. Values past
    /// midnight keep their instant; the clock fields wrap.
    fn result(&self, name: PrayerName, local_seconds: i64, estimated: bool) -> PrayerTimeResult {
        let timestamp = self.day_start_ms + local_seconds * 1000 - self.offset_minutes as i64 * 60_000;
        let of_day = local_seconds.rem_euclid(SECONDS_PER_DAY) as u32;
        let time = NaiveTime::from_num_seconds_from_midnight_opt(of_day, 0).unwrap_or(NaiveTime::MIN);

        PrayerTimeResult {
            name,
            timestamp,
            hour: of_day / 3600,
            minute: of_day % 3600 / 60,
            second: of_day % 60,
            formatted: format_clock(time, self.use_12_hour_clock),
            estimated,
        }
    }
}

fn resolve(name: PrayerName, solved: SolarTime, fallback: f64, coords: GeoCoordinate, sun: &SolarPosition) -> RawTime {
    match solved {
        SolarTime::Solved(h) => RawTime::solved(h),
        SolarTime::Unsolvable { cos_h } => {
            log::warn!(
                "{} unsolvable at lat {:.4} (declination {:.3}°, cos H {:.4}); using fallback",
                name, coords.lat, sun.declination, cos_h
            );
            RawTime::fallback(fallback)
        }
    }
}

/// Calculates all prayer times for a request.
///
/// Times the Sun never reaches (high latitudes) fall back to solar noon,
/// or 15:00 local for Asr, and are flagged `estimated`.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use miqat_core::{calculate, CalculationRequest};
/// use miqat_types::{CalculationMethod, GeoCoordinate, Madhab};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let jakarta = GeoCoordinate::new(-6.2088, 106.8456).unwrap();
/// let request = CalculationRequest::new(jakarta, date)
///     .method(CalculationMethod::Kemenag)
///     .madhab(Madhab::Shafi)
///     .utc_offset_minutes(7 * 60);
///
/// let day = calculate(&request);
/// println!("Fajr: {}", day.fajr().formatted);
/// println!("Qibla: {}°", day.qibla_bearing);
/// ```
pub fn calculate(request: &CalculationRequest) -> DailyResult {
    let coords = request.coordinate;
    let params = request.method.parameters();
    let sun = SolarPosition::at(julian_day_for(request.date));
    let clock = LocalClock::new(request);

    let noon = solar_noon(coords.lng, sun.equation_of_time);
    let asr_fallback = ASR_FALLBACK_HOUR - request.utc_offset_minutes as f64 / 60.0;

    let fajr = resolve(
        PrayerName::Fajr,
        time_for_zenith(&sun, coords, 90.0 + params.fajr_angle, Direction::Rising),
        noon, coords, &sun,
    );
    let sunrise = resolve(
        PrayerName::Sunrise,
        time_for_zenith(&sun, coords, SUNRISE_ZENITH, Direction::Rising),
        noon, coords, &sun,
    );
    let dhuhr = RawTime::solved(noon);
    let asr = resolve(
        PrayerName::Asr,
        asr_time(&sun, coords, request.madhab.shadow_factor()),
        asr_fallback, coords, &sun,
    );
    let maghrib = resolve(
        PrayerName::Maghrib,
        time_for_zenith(&sun, coords, SUNRISE_ZENITH, Direction::Setting),
        noon, coords, &sun,
    );

    let maghrib_seconds = clock.local_seconds(maghrib.ut_hours);
    let isha = match params.isha {
        IshaRule::Angle(angle) => {
            let raw = resolve(
                PrayerName::Isha,
                time_for_zenith(&sun, coords, 90.0 + angle, Direction::Setting),
                noon, coords, &sun,
            );
            clock.result(PrayerName::Isha, clock.local_seconds(raw.ut_hours), raw.estimated)
        }
        // Offset from the rounded Maghrib so the gap is exact.
        IshaRule::Interval(minutes) => clock.result(
            PrayerName::Isha,
            maghrib_seconds + minutes as i64 * 60,
            maghrib.estimated,
        ),
    };

    let at = |name: PrayerName, raw: RawTime| clock.result(name, clock.local_seconds(raw.ut_hours), raw.estimated);
    let day = DailyResult {
        date: request.date,
        coordinate: coords,
        utc_offset_minutes: request.utc_offset_minutes,
        prayers: [
            at(PrayerName::Fajr, fajr),
            at(PrayerName::Sunrise, sunrise),
            at(PrayerName::Dhuhr, dhuhr),
            at(PrayerName::Asr, asr),
            clock.result(PrayerName::Maghrib, maghrib_seconds, maghrib.estimated),
            isha,
        ],
        qibla_bearing: qibla_bearing(coords),
    };

    log::debug!(
        "{} at ({:.4}, {:.4}) {} {}: {}",
        request.date,
        coords.lat,
        coords.lng,
        request.method,
        request.madhab,
        day.prayers.iter().map(|p| p.formatted.as_str()).collect::<Vec<_>>().join(" "),
    );
    day
}

/// Calculates prayer times from explicit arguments in UT (offset 0).
pub fn compute(
    coordinate: GeoCoordinate,
    date: NaiveDate,
    method: CalculationMethod,
    madhab: Madhab,
    use_12_hour_clock: bool,
) -> DailyResult {
    let request = CalculationRequest::new(coordinate, date)
        .method(method)
        .madhab(madhab)
        .use_12_hour_clock(use_12_hour_clock);
    calculate(&request)
}

/// Calculates prayer times for a saved location.
///
/// # Errors
/// `MissingCoordinate` if the location has no latitude/longitude,
/// `InvalidCoordinate` if they are out of range.
pub fn compute_for_location(
    location: &Location,
    date: NaiveDate,
    settings: &CalculationSettings,
) -> Result<DailyResult, MiqatError> {
    let coordinate = location.coordinate()?;
    Ok(calculate(&settings.request(coordinate, date)))
}

/// Iterator yielding one `DailyResult` per day.
pub struct DailyIterator {
    request: CalculationRequest,
    current: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DailyIterator {
    type Item = DailyResult;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.current.filter(|d| *d <= self.end)?;
        self.current = date.succ_opt();
        Some(calculate(&self.request.on(date)))
    }
}

/// Lazily calculates prayer times for every date in `start..=end`.
pub fn compute_range(
    settings: &CalculationSettings,
    coordinate: GeoCoordinate,
    start: NaiveDate,
    end: NaiveDate,
) -> DailyIterator {
    DailyIterator {
        request: settings.request(coordinate, start),
        current: Some(start),
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn london() -> GeoCoordinate {
        GeoCoordinate::new_unchecked(51.5074, -0.1278)
    }

    #[test]
    fn test_order_and_names() {
        let day = compute(london(), date(2024, 3, 15), CalculationMethod::Mwl, Madhab::Shafi, false);
        let names: Vec<_> = day.prayers.iter().map(|p| p.name).collect();
        assert_eq!(names, PrayerName::ALL.to_vec());
        for w in day.prayers.windows(2) {
            assert!(w[0].timestamp < w[1].timestamp, "{:?} !< {:?}", w[0].name, w[1].name);
        }
        assert!(!day.has_estimates());
    }

    #[test]
    fn test_interval_isha_exact() {
        for method in [CalculationMethod::Makkah, CalculationMethod::Gulf, CalculationMethod::Qatar] {
            let day = compute(london(), date(2024, 6, 1), method, Madhab::Shafi, false);
            assert_eq!(day.isha().timestamp - day.maghrib().timestamp, 90 * 60 * 1000, "{method}");
        }
    }

    #[test]
    fn test_offset_shifts_clock_not_instant() {
        let base = CalculationRequest::new(london(), date(2024, 6, 15));
        let utc = calculate(&base);
        let bst = calculate(&base.utc_offset_minutes(60));

        assert_eq!(utc.dhuhr().timestamp, bst.dhuhr().timestamp);
        assert_eq!(bst.dhuhr().hour, utc.dhuhr().hour + 1);
        assert_eq!(bst.dhuhr().local_time().minute(), utc.dhuhr().local_time().minute());
    }

    #[test]
    fn test_polar_fallback_is_flagged() {
        // Tromsø, midsummer: the Sun never sets nor dips 18° below the horizon.
        let tromso = GeoCoordinate::new_unchecked(69.6492, 18.9553);
        let day = compute(tromso, date(2024, 6, 21), CalculationMethod::Mwl, Madhab::Shafi, false);

        let estimated = day.estimated_prayers();
        for name in [PrayerName::Fajr, PrayerName::Sunrise, PrayerName::Maghrib, PrayerName::Isha] {
            assert!(estimated.contains(&name), "{name} should be estimated");
            assert_eq!(day.get(name).timestamp, day.dhuhr().timestamp);
        }
        assert!(!day.dhuhr().estimated);
        assert!(!day.asr().estimated);
    }

    #[test]
    fn test_asr_fallback_is_three_pm_local() {
        // Polar night: the Sun never climbs to the Asr altitude.
        let svalbard = GeoCoordinate::new_unchecked(78.2232, 15.6267);
        let request = CalculationRequest::new(svalbard, date(2024, 12, 21)).utc_offset_minutes(60);
        let day = calculate(&request);
        assert!(day.asr().estimated);
        assert_eq!((day.asr().hour, day.asr().minute, day.asr().second), (15, 0, 0));
    }

    #[test]
    fn test_location_without_coordinates() {
        let location = Location::new("Springfield", "Nowhere");
        let result = compute_for_location(&location, date(2024, 1, 1), &CalculationSettings::default());
        assert!(matches!(result, Err(MiqatError::MissingCoordinate { .. })));
    }

    #[test]
    fn test_compute_range() {
        let days: Vec<_> = compute_range(&CalculationSettings::default(), london(), date(2024, 2, 27), date(2024, 3, 2)).collect();
        assert_eq!(days.len(), 5);
        assert_eq!(days[2].date, date(2024, 2, 29));
        assert!(compute_range(&CalculationSettings::default(), london(), date(2024, 3, 2), date(2024, 3, 1)).next().is_none());
    }
}
