use proptest::prelude::*;
use chrono::NaiveDate;
use miqat::prelude::*;

fn day_from(offset: u32) -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    base.checked_add_signed(chrono::Duration::days(offset as i64)).unwrap()
}

/// Whole-hour clock offset that keeps local solar noon near 12:00.
fn nominal_offset(lng: f64) -> i32 {
    (lng / 15.0).round() as i32 * 60
}

proptest! {
    /// Invariant: identical requests give identical results.
    #[test]
    fn compute_is_deterministic(lat in -89.0f64..89.0, lng in -180.0f64..=180.0, days in 0u32..730) {
        let date = day_from(days);
        let coord = GeoCoordinate::new_unchecked(lat, lng);
        let a = compute(coord, date, CalculationMethod::Mwl, Madhab::Shafi, true);
        let b = compute(coord, date, CalculationMethod::Mwl, Madhab::Shafi, true);
        prop_assert_eq!(a, b);
    }

    /// Invariant: away from polar regions the six times are strictly chronological.
    #[test]
    fn times_are_ordered(
        lat in -45.0f64..45.0,
        lng in -180.0f64..=180.0,
        days in 0u32..730,
        method in prop::sample::select(CalculationMethod::ALL.to_vec()),
        madhab in prop::sample::select(Madhab::ALL.to_vec()),
    ) {
        let request = CalculationRequest::new(GeoCoordinate::new_unchecked(lat, lng), day_from(days))
            .method(method)
            .madhab(madhab)
            .utc_offset_minutes(nominal_offset(lng));
        let day = calculate(&request);

        prop_assert!(!day.has_estimates(), "estimates at lat {}: {:?}", lat, day.estimated_prayers());
        for w in day.prayers.windows(2) {
            prop_assert!(w[0].timestamp < w[1].timestamp, "{} !< {} at ({}, {})", w[0].name, w[1].name, lat, lng);
        }
    }

    /// Invariant: Qibla bearing is normalized, poles and antimeridian included.
    #[test]
    fn qibla_bearing_in_range(lat in -90.0f64..=90.0, lng in prop_oneof![Just(-180.0f64), Just(180.0f64), -180.0f64..=180.0]) {
        let b = qibla_bearing(GeoCoordinate::new_unchecked(lat, lng));
        prop_assert!((0.0..360.0).contains(&b));
    }

    /// Invariant: Hanafi Asr never starts before the other schools' Asr.
    #[test]
    fn hanafi_asr_not_earlier(lat in -55.0f64..55.0, lng in -180.0f64..=180.0, days in 0u32..730) {
        let request = CalculationRequest::new(GeoCoordinate::new_unchecked(lat, lng), day_from(days))
            .utc_offset_minutes(nominal_offset(lng));
        let hanafi = calculate(&request.madhab(Madhab::Hanafi));
        for madhab in [Madhab::Shafi, Madhab::Maliki, Madhab::Hanbali] {
            let other = calculate(&request.madhab(madhab));
            prop_assert!(hanafi.asr().timestamp >= other.asr().timestamp);
        }
    }

    /// Invariant: interval methods put Isha exactly 90 minutes after Maghrib.
    #[test]
    fn interval_isha_is_exact(
        lat in -89.0f64..89.0,
        lng in -180.0f64..=180.0,
        days in 0u32..730,
        method in prop::sample::select(vec![CalculationMethod::Makkah, CalculationMethod::Gulf, CalculationMethod::Qatar]),
    ) {
        let day = compute(GeoCoordinate::new_unchecked(lat, lng), day_from(days), method, Madhab::Shafi, false);
        prop_assert_eq!(day.isha().timestamp - day.maghrib().timestamp, 90 * 60_000);
        prop_assert_eq!(day.isha().estimated, day.maghrib().estimated);
    }

    /// Invariant: every clock field stays on the requested date.
    #[test]
    fn clock_fields_in_range(lat in -89.0f64..89.0, lng in -180.0f64..=180.0, days in 0u32..730) {
        let day = compute(GeoCoordinate::new_unchecked(lat, lng), day_from(days), CalculationMethod::Isna, Madhab::Hanafi, false);
        for p in &day.prayers {
            prop_assert!(p.hour < 24 && p.minute < 60 && p.second < 60);
            prop_assert_eq!(p.formatted.len(), 5);
        }
    }
}
