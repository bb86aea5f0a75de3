pub mod format;
pub mod prayer;
pub mod request;
pub mod result;
pub mod suggest;

pub use miqat_types as types;
pub use miqat_astronomy as astronomy;

pub use types::{CalculationMethod, GeoCoordinate, Location, Madhab, MethodParameters, MiqatError, PrayerName};
pub use astronomy::{compass_point, qibla_bearing, qibla_distance_km};
pub use format::{format_clock, parse_clock};
pub use prayer::{calculate, compute, compute_for_location, compute_range, DailyIterator};
pub use request::{CalculationRequest, CalculationRequestBuilder, CalculationSettings};
pub use result::{Countdown, DailyResult, NextPrayer, PrayerTimeResult};
pub use suggest::suggest_method;

pub mod prelude {
    pub use crate::types::*;
    pub use crate::{calculate, compute, compute_for_location, compute_range, qibla_bearing};
    pub use crate::{CalculationRequest, CalculationSettings, DailyResult, PrayerTimeResult};
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn london_winter() -> DailyResult {
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        compute(GeoCoordinate::new_unchecked(51.5074, -0.1278), date, CalculationMethod::Mwl, Madhab::Shafi, false)
    }

    #[test]
    fn test_next_prayer_skips_sunrise() {
        let day = london_winter();
        // Just after Fajr: next is Dhuhr, not Sunrise.
        let now = day.fajr().timestamp + 1_000;
        let next = day.next_prayer(now).unwrap();
        assert_eq!(next.prayer.name, PrayerName::Dhuhr);
        assert_eq!(next.countdown.total_seconds, (day.dhuhr().timestamp - now) / 1000);
        assert_eq!(
            next.countdown.hours * 3600 + next.countdown.minutes * 60 + next.countdown.seconds,
            next.countdown.total_seconds
        );
    }

    #[test]
    fn test_next_prayer_none_after_isha() {
        let day = london_winter();
        assert!(day.next_prayer(day.isha().timestamp).is_none());
        let before = day.next_prayer(day.fajr().timestamp - 1).unwrap();
        assert_eq!(before.prayer.name, PrayerName::Fajr);
        assert_eq!(before.countdown.total_seconds, 0);
    }

    #[test]
    fn test_prayer_windows() {
        let day = london_winter();
        assert!(day.is_within(PrayerName::Asr, day.asr().timestamp));
        assert!(!day.is_within(PrayerName::Asr, day.maghrib().timestamp));
        assert!(day.is_within(PrayerName::Fajr, day.sunrise().timestamp - 1));
        assert!(!day.is_within(PrayerName::Sunrise, day.sunrise().timestamp));

        let end_of_day = NaiveDate::from_ymd_opt(2024, 12, 22).unwrap()
            .and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp_millis();
        assert!(day.is_within(PrayerName::Isha, end_of_day - 1));
        assert!(!day.is_within(PrayerName::Isha, end_of_day));
    }

    #[test]
    fn test_obligatory_excludes_sunrise() {
        let day = london_winter();
        let names: Vec<_> = day.obligatory().map(|p| p.name).collect();
        assert_eq!(names, vec![PrayerName::Fajr, PrayerName::Dhuhr, PrayerName::Asr, PrayerName::Maghrib, PrayerName::Isha]);
    }
}
