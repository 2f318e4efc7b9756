use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use thiserror::Error;

const MS_PER_SECOND: i64 = 1000;
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Season start baked in by `build.rs` (validated there).
const SEASON_START: &str = env!("SEASON_START");
const SEASON_LABEL: &str = "Calgary Chinese Basketball League Season Asian League Season 5";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountdownError {
    #[error("invalid target date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeLeft {
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY as u64
            + u64::from(self.hours) * SECONDS_PER_HOUR as u64
            + u64::from(self.minutes) * SECONDS_PER_MINUTE as u64
            + u64::from(self.seconds)
    }

    /// Each unit zero-padded to at least two digits, in display order.
    pub fn padded(&self) -> [String; 4] {
        [
            pad(self.days),
            pad(self.hours.into()),
            pad(self.minutes.into()),
            pad(self.seconds.into()),
        ]
    }
}

fn pad(n: u64) -> String {
    format!("{n:02}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Remaining(TimeLeft),
    Expired,
}

impl CountdownState {
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }
}

/// Breaks the time between `now` and `target` into whole days, hours, minutes
/// and seconds. Anything at or past the target is `Expired`.
pub fn time_left(target: DateTime<Utc>, now: DateTime<Utc>) -> CountdownState {
    let difference = (target - now).num_milliseconds();
    if difference <= 0 {
        return CountdownState::Expired;
    }
    let total = difference / MS_PER_SECOND;
    CountdownState::Remaining(TimeLeft {
        days: (total / SECONDS_PER_DAY) as u64,
        hours: ((total % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u8,
        minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
        seconds: (total % SECONDS_PER_MINUTE) as u8,
    })
}

pub fn parse_target_date(s: &str) -> Result<NaiveDate, CountdownError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CountdownError::InvalidDate(s.to_string()))
}

/// Midnight at the start of `date` in `tz`, as a UTC instant.
pub fn target_instant<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    if let Some(dt) = tz.from_local_datetime(&midnight).earliest() {
        return dt.with_timezone(&Utc);
    }
    // midnight skipped by a DST jump: the first local time that exists is an
    // hour later at most
    (1..=4)
        .filter_map(|quarter| {
            let shifted = midnight + chrono::Duration::minutes(15 * quarter);
            tz.from_local_datetime(&shifted).earliest()
        })
        .next()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

#[derive(Debug, Clone, Copy)]
pub struct Season {
    pub label: &'static str,
    pub start: NaiveDate,
}

impl Season {
    pub fn current() -> Self {
        let start =
            parse_target_date(SEASON_START).expect("SEASON_START is validated by build.rs");
        Self {
            label: SEASON_LABEL,
            start,
        }
    }

    /// Season start at local midnight of the runtime. Only meaningful in the
    /// browser, where the runtime is the visitor's.
    pub fn target(&self) -> DateTime<Utc> {
        target_instant(self.start, &chrono::Local)
    }

    pub fn time_left(&self) -> CountdownState {
        time_left(self.target(), Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 3, 14, 27, 9).unwrap()
    }

    #[test]
    fn test_one_of_each_unit() {
        let now = now();
        let target = now + Duration::milliseconds(90_061_000);
        let state = time_left(target, now);
        assert_eq!(
            state,
            CountdownState::Remaining(TimeLeft {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            })
        );
    }

    #[test]
    fn test_past_target_is_expired() {
        let now = now();
        assert_eq!(
            time_left(now - Duration::seconds(1), now),
            CountdownState::Expired
        );
        assert_eq!(
            time_left(now - Duration::days(400), now),
            CountdownState::Expired
        );
        // exactly at the target counts as started
        assert!(time_left(now, now).is_expired());
    }

    #[test]
    fn test_units_stay_in_range() {
        let now = now();
        let offsets_ms = [
            1,
            999,
            1_000,
            59_999,
            60_000,
            3_599_999,
            3_600_000,
            86_399_999,
            86_400_000,
            123_456_789,
            987_654_321_000,
        ];
        for ms in offsets_ms {
            let state = time_left(now + Duration::milliseconds(ms), now);
            match state {
                CountdownState::Remaining(t) => {
                    assert!(t.hours < 24, "hours out of range for {ms}ms: {t:?}");
                    assert!(t.minutes < 60, "minutes out of range for {ms}ms: {t:?}");
                    assert!(t.seconds < 60, "seconds out of range for {ms}ms: {t:?}");
                    // floor division, never rounds up
                    assert_eq!(t.total_seconds(), (ms / 1000) as u64);
                }
                CountdownState::Expired => panic!("{ms}ms in the future reported as expired"),
            }
        }
    }

    #[test]
    fn test_sub_second_remaining_is_all_zero() {
        let now = now();
        let state = time_left(now + Duration::milliseconds(400), now);
        assert_eq!(
            state,
            CountdownState::Remaining(TimeLeft {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
            })
        );
    }

    #[test]
    fn test_padding() {
        let t = TimeLeft {
            days: 123,
            hours: 5,
            minutes: 0,
            seconds: 42,
        };
        assert_eq!(t.padded(), ["123", "05", "00", "42"].map(String::from));
    }

    #[test]
    fn test_parse_target_date() {
        assert_eq!(
            parse_target_date("2026-02-06"),
            Ok(NaiveDate::from_ymd_opt(2026, 2, 6).unwrap())
        );
        assert!(matches!(
            parse_target_date("Feb 6 2026"),
            Err(CountdownError::InvalidDate(_))
        ));
        assert!(parse_target_date("2026-02-30").is_err());
    }

    #[test]
    fn test_target_is_local_midnight() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 6).unwrap();
        // Calgary in winter is UTC-7
        let mountain = FixedOffset::west_opt(7 * 3600).unwrap();
        assert_eq!(
            target_instant(date, &mountain),
            Utc.with_ymd_and_hms(2026, 2, 6, 7, 0, 0).unwrap()
        );
        assert_eq!(
            target_instant(date, &Utc),
            Utc.with_ymd_and_hms(2026, 2, 6, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_configured_season() {
        let season = Season::current();
        assert_eq!(season.start, parse_target_date(SEASON_START).unwrap());
        assert!(season.label.contains("Season 5"));
    }
}
