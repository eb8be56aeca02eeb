use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;
use stats::{Resolution, TimePoint, merge_items};
use tracing::{debug, warn};

use crate::snapshot::{ContributionTime, DailySwipes};

pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeekdayTotal {
    pub day: &'static str,
    pub total: f64,
}

/// Swipes on one calendar day, for the contribution heatmap.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub count: i64,
}

/// Parses a `YYYY-MM-DD` day. Anything else yields `None` and is counted in
/// `malformed`.
fn parse_day(raw: Option<&str>, malformed: &mut usize) -> Option<NaiveDate> {
    let raw = raw?;
    match raw.trim().parse::<NaiveDate>() {
        Ok(date) => Some(date),
        Err(_) => {
            *malformed += 1;
            None
        }
    }
}

/// Turns raw per-day contribution times into one ascending point per bucket.
///
/// Entries without a date, with an unparseable date or with a non-positive
/// total are dropped; entries landing in the same bucket are summed.
pub fn contribution_series(raw: &[ContributionTime], resolution: Resolution) -> Vec<TimePoint> {
    let mut malformed = 0;
    let points: Vec<TimePoint> = raw
        .iter()
        .filter_map(|c| {
            let date = parse_day(c.date.as_deref(), &mut malformed)?;
            let date = resolution.truncate(date.and_time(NaiveTime::MIN).and_utc());
            Some(TimePoint {
                date,
                total: c.total as f64,
            })
        })
        .filter(|p| p.total > 0.0)
        .collect();

    if malformed > 0 {
        warn!(malformed, "skipped contribution entries with unparseable dates");
    }
    let dropped = raw.len() - points.len();
    if dropped > 0 {
        debug!(dropped, "skipped undated or empty contribution entries");
    }

    let mut series = merge_items(
        points,
        |p| p.date,
        |prev, item, _| TimePoint {
            date: prev.date,
            total: prev.total + item.total,
        },
    );
    series.sort_by_key(|p| p.date);
    series
}

/// Sums a series by the UTC weekday of each point. Always returns all seven
/// days, Sunday first, so the bar chart has no gaps.
pub fn weekday_totals(series: &[TimePoint]) -> Vec<WeekdayTotal> {
    let mut totals = [0.0_f64; 7];
    for point in series {
        totals[point.date.weekday().num_days_from_sunday() as usize] += point.total;
    }

    WEEKDAYS
        .iter()
        .zip(totals)
        .map(|(&day, total)| WeekdayTotal { day, total })
        .collect()
}

/// Per-day swipe counts for the heatmap, ascending, one entry per day.
pub fn swipe_calendar(raw: &[DailySwipes]) -> Vec<CalendarDay> {
    let mut malformed = 0;
    let days: Vec<CalendarDay> = raw
        .iter()
        .filter_map(|d| {
            let date = parse_day(d.task_date.as_deref(), &mut malformed)?;
            Some(CalendarDay {
                date,
                count: d.total_swipe.unwrap_or(0),
            })
        })
        .collect();

    if malformed > 0 {
        warn!(malformed, "skipped swipe entries with unparseable dates");
    }

    let mut days = merge_items(
        days,
        |d| d.date,
        |prev, item, _| CalendarDay {
            date: prev.date,
            count: prev.count + item.count,
        },
    );
    days.sort_by_key(|d| d.date);
    days
}
