use std::fmt;

use chrono::{DateTime, Datelike, Days, Months, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Series longer than this many daily entries are shown per year.
const YEARLY_THRESHOLD: f64 = 5.0 * 365.0;
/// Series longer than this many daily entries are shown per month.
const MONTHLY_THRESHOLD: f64 = 0.5 * 365.0;

/// Granularity that timestamps are aligned to before they are merged and charted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Day,
    Month,
    Year,
}

impl Resolution {
    /// Picks a resolution from the number of raw daily entries, so long
    /// histories don't end up with thousands of points.
    pub fn for_series_len(len: usize) -> Self {
        let len = len as f64;
        if len > YEARLY_THRESHOLD {
            Resolution::Year
        } else if len > MONTHLY_THRESHOLD {
            Resolution::Month
        } else {
            Resolution::Day
        }
    }

    /// Truncates `ts` to the start of its bucket, in UTC.
    ///
    /// Every resolution drops the time of day. `Month` and `Year` also reset
    /// to the first of the month, and `Year` additionally resets to January.
    pub fn truncate(self, ts: DateTime<Utc>) -> DateTime<Utc> {
        let date = ts.date_naive();
        let date = match self {
            Resolution::Day => date,
            Resolution::Month => date.with_day(1).unwrap_or(date),
            Resolution::Year => date.with_ordinal(1).unwrap_or(date),
        };
        date.and_time(NaiveTime::MIN).and_utc()
    }

    /// Advances an aligned timestamp by one calendar unit. Month and year
    /// steps use calendar arithmetic, never a fixed number of seconds.
    pub fn step(self, ts: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Resolution::Day => ts.checked_add_days(Days::new(1)),
            Resolution::Month => ts.checked_add_months(Months::new(1)),
            Resolution::Year => ts.checked_add_months(Months::new(12)),
        }
    }

    /// Axis/tooltip label for a bucket start, e.g. `Jan 5, 2023`, `Jan 2023` or `2023`.
    pub fn label(self, ts: DateTime<Utc>) -> String {
        let pattern = match self {
            Resolution::Day => "%b %-d, %Y",
            Resolution::Month => "%b %Y",
            Resolution::Year => "%Y",
        };
        ts.format(pattern).to_string()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resolution::Day => "day",
            Resolution::Month => "month",
            Resolution::Year => "year",
        };
        f.write_str(name)
    }
}

/// [`Resolution::truncate`] over epoch milliseconds.
pub fn normalize_millis(millis: i64, resolution: Resolution) -> Result<i64, StatsError> {
    let ts = DateTime::from_timestamp_millis(millis).ok_or(StatsError::TimestampOutOfRange(millis))?;
    Ok(resolution.truncate(ts).timestamp_millis())
}
