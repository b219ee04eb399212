//! Calendar-month arithmetic for time-series bucketing.
//!
//! Buckets are keyed by real (year, month) pairs internally; the sortable
//! `"YYYY-MM"` form only exists at the display/serialization boundary.

use anyhow::anyhow;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// One calendar month, e.g. 2026-08.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based, 1..=12.
    pub month: u32,
}

impl MonthKey {
    /// Truncates a timestamp to its calendar month.
    pub fn of(ts: DateTime<Utc>) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
        }
    }

    /// The following calendar month.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding calendar month.
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// First instant of this month (UTC).
    pub fn start(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(self.year, self.month, 1, 0, 0, 0)
            .single()
            .unwrap_or_default()
    }

    /// First instant of the following month; the exclusive upper bound for
    /// "as of this month's end" sums.
    pub fn end_exclusive(&self) -> DateTime<Utc> {
        self.next().start()
    }

    /// Whether `ts` falls inside this calendar month.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        Self::of(ts) == *self
    }

    /// The `n` months ending at `end`, ascending. `n` of zero yields an
    /// empty window.
    pub fn trailing(end: MonthKey, n: usize) -> Vec<MonthKey> {
        let mut months = Vec::with_capacity(n);
        let mut key = end;
        for _ in 0..n {
            months.push(key);
            key = key.previous();
        }
        months.reverse();
        months
    }
}

impl Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| anyhow!("invalid month key: {s}"))?;
        let year: i32 = year.parse().map_err(|_| anyhow!("invalid year in: {s}"))?;
        let month: u32 = month.parse().map_err(|_| anyhow!("invalid month in: {s}"))?;
        if !(1..=12).contains(&month) {
            return Err(anyhow!("month out of range in: {s}"));
        }
        Ok(Self { year, month })
    }
}

// On the wire a month is its sortable "YYYY-MM" form.
impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn truncates_to_calendar_month() {
        let key = MonthKey::of(ts("2026-08-23T14:05:00Z"));
        assert_eq!(key, MonthKey { year: 2026, month: 8 });
        assert_eq!(key.to_string(), "2026-08");
    }

    #[test]
    fn zero_pads_single_digit_months() {
        let key = MonthKey { year: 2026, month: 3 };
        assert_eq!(key.to_string(), "2026-03");
    }

    #[test]
    fn successor_and_predecessor_wrap_across_years() {
        let dec = MonthKey { year: 2025, month: 12 };
        assert_eq!(dec.next(), MonthKey { year: 2026, month: 1 });
        let jan = MonthKey { year: 2026, month: 1 };
        assert_eq!(jan.previous(), dec);
    }

    #[test]
    fn month_end_is_exclusive_start_of_next() {
        let key = MonthKey { year: 2026, month: 2 };
        assert_eq!(key.start(), ts("2026-02-01T00:00:00Z"));
        assert_eq!(key.end_exclusive(), ts("2026-03-01T00:00:00Z"));
        assert!(key.contains(ts("2026-02-28T23:59:59Z")));
        assert!(!key.contains(ts("2026-03-01T00:00:00Z")));
    }

    #[test]
    fn trailing_window_is_ascending_and_complete() {
        let end = MonthKey { year: 2026, month: 2 };
        let window = MonthKey::trailing(end, 4);
        let rendered: Vec<String> = window.iter().map(|m| m.to_string()).collect();
        assert_eq!(rendered, vec!["2025-11", "2025-12", "2026-01", "2026-02"]);

        // Lexicographic order of the rendered keys matches calendar order.
        let mut sorted = rendered.clone();
        sorted.sort();
        assert_eq!(sorted, rendered);
    }

    #[test]
    fn round_trips_through_wire_form() {
        let key: MonthKey = "2025-07".parse().unwrap();
        assert_eq!(key, MonthKey { year: 2025, month: 7 });
        assert_eq!(serde_yaml::to_string(&key).unwrap().trim(), "2025-07");

        assert!("2025-13".parse::<MonthKey>().is_err());
        assert!("202507".parse::<MonthKey>().is_err());
    }
}
