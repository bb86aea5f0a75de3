//! Computed prayer times and the helpers built on them: next prayer,
//! countdown and prayer windows.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use miqat_types::{GeoCoordinate, PrayerName};
use serde::{Serialize, Deserialize};
use smallvec::SmallVec;

const MS_PER_DAY: i64 = 86_400_000;

/// One computed prayer time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimeResult {
    pub name: PrayerName,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Local clock components.
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// `HH:mm` or `h:mm AM/PM`.
    pub formatted: String,
    /// True when the Sun never reaches the required angle and a fallback
    /// time was substituted.
    pub estimated: bool,
}

impl PrayerTimeResult {
    /// Local wall-clock time.
    pub fn local_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second).unwrap_or(NaiveTime::MIN)
    }

    /// The instant as a UTC datetime.
    pub fn utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Time remaining until a prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_seconds: i64,
}

impl Countdown {
    fn from_millis(ms: i64) -> Self {
        let total_seconds = ms.div_euclid(1000);
        Self {
            hours: total_seconds / 3600,
            minutes: (total_seconds % 3600) / 60,
            seconds: total_seconds % 60,
            total_seconds,
        }
    }
}

/// The upcoming prayer and how long until it starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextPrayer {
    pub prayer: PrayerTimeResult,
    pub countdown: Countdown,
}

/// All prayer times for one place and date, plus the Qibla bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyResult {
    pub date: NaiveDate,
    pub coordinate: GeoCoordinate,
    pub utc_offset_minutes: i32,
    /// Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha.
    pub prayers: [PrayerTimeResult; 6],
    /// Degrees from true north, in [0, 360).
    pub qibla_bearing: f64,
}

impl DailyResult {
    pub fn get(&self, name: PrayerName) -> &PrayerTimeResult {
        &self.prayers[name as usize]
    }

    pub fn fajr(&self) -> &PrayerTimeResult {
        self.get(PrayerName::Fajr)
    }

    pub fn sunrise(&self) -> &PrayerTimeResult {
        self.get(PrayerName::Sunrise)
    }

    pub fn dhuhr(&self) -> &PrayerTimeResult {
        self.get(PrayerName::Dhuhr)
    }

    pub fn asr(&self) -> &PrayerTimeResult {
        self.get(PrayerName::Asr)
    }

    pub fn maghrib(&self) -> &PrayerTimeResult {
        self.get(PrayerName::Maghrib)
    }

    pub fn isha(&self) -> &PrayerTimeResult {
        self.get(PrayerName::Isha)
    }

    /// Prayer times in order, Sunrise excluded.
    pub fn obligatory(&self) -> impl Iterator<Item = &PrayerTimeResult> {
        self.prayers.iter().filter(|p| p.name.is_prayer())
    }

    pub fn has_estimates(&self) -> bool {
        self.prayers.iter().any(|p| p.estimated)
    }

    /// Names of the times that fell back to an estimate.
    pub fn estimated_prayers(&self) -> SmallVec<[PrayerName; 6]> {
        self.prayers.iter().filter(|p| p.estimated).map(|p| p.name).collect()
    }

    /// Epoch milliseconds of local midnight starting this date.
    fn local_day_start(&self) -> i64 {
        self.date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
            - self.utc_offset_minutes as i64 * 60_000
    }

    /// The first prayer after `now_ms`, skipping Sunrise.
    ///
    /// Returns `None` once Isha has started; tomorrow's Fajr needs a
    /// calculation for the next date.
    pub fn next_prayer(&self, now_ms: i64) -> Option<NextPrayer> {
        self.obligatory()
            .find(|p| p.timestamp > now_ms)
            .map(|p| NextPrayer {
                prayer: p.clone(),
                countdown: Countdown::from_millis(p.timestamp - now_ms),
            })
    }

    /// Whether `now_ms` falls between the start of `name` and the next
    /// time in the sequence. Isha lasts until the end of the local day.
    /// Always false for Sunrise.
    pub fn is_within(&self, name: PrayerName, now_ms: i64) -> bool {
        if !name.is_prayer() {
            return false;
        }
        let start = self.get(name).timestamp;
        let end = match name {
            PrayerName::Isha => self.local_day_start() + MS_PER_DAY,
            _ => self.prayers[name as usize + 1].timestamp,
        };
        now_ms >= start && now_ms < end
    }
}
