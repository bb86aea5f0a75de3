//! Clock formatting for prayer times.

use chrono::NaiveTime;
use miqat_types::MiqatError;

const FORMAT_24H: &str = "%H:%M";
const FORMAT_12H: &str = "%-I:%M %p";

/// Formats a wall-clock time as `HH:mm` or `h:mm AM/PM`.
pub fn format_clock(time: NaiveTime, use_12_hour_clock: bool) -> String {
    let pattern = if use_12_hour_clock { FORMAT_12H } else { FORMAT_24H };
    time.format(pattern).to_string()
}

/// Parses either clock format back into a time (seconds are zero).
pub fn parse_clock(s: &str) -> Result<NaiveTime, MiqatError> {
    let s = s.trim();
    let upper = s.to_ascii_uppercase();
    if upper.ends_with("AM") || upper.ends_with("PM") {
        NaiveTime::parse_from_str(&upper, "%I:%M %p")
    } else {
        NaiveTime::parse_from_str(s, FORMAT_24H)
    }
    .map_err(|_| MiqatError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_24_hour() {
        assert_eq!(format_clock(t(5, 7), false), "05:07");
        assert_eq!(format_clock(t(13, 5), false), "13:05");
        assert_eq!(format_clock(t(0, 0), false), "00:00");
    }

    #[test]
    fn test_12_hour() {
        assert_eq!(format_clock(t(13, 5), true), "1:05 PM");
        assert_eq!(format_clock(t(0, 30), true), "12:30 AM");
        assert_eq!(format_clock(t(12, 0), true), "12:00 PM");
        assert_eq!(format_clock(t(9, 41), true), "9:41 AM");
    }

    #[test]
    fn test_seconds_are_truncated() {
        let time = NaiveTime::from_hms_opt(6, 14, 59).unwrap();
        assert_eq!(format_clock(time, false), "06:14");
    }

    #[test]
    fn test_round_trip_between_formats() {
        let parsed = parse_clock("13:05").unwrap();
        assert_eq!(format_clock(parsed, true), "1:05 PM");

        let parsed = parse_clock("1:05 PM").unwrap();
        assert_eq!(format_clock(parsed, false), "13:05");

        for hour in 0..24 {
            for minute in [0, 5, 59] {
                let time = t(hour, minute);
                let back = parse_clock(&format_clock(time, true)).unwrap();
                assert_eq!((back.hour(), back.minute()), (hour, minute));
            }
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_clock("25:00"), Err(MiqatError::InvalidTime(_))));
        assert!(parse_clock("noon").is_err());
    }
}
