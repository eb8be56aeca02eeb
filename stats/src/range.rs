use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resolution::Resolution;

/// One sample of a contribution time series. Serializes as
/// `{"date": <epoch millis>, "total": <number>}`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TimePoint {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    pub total: f64,
}

/// Every resolution-aligned timestamp from `start` to `end` inclusive, ascending.
///
/// Both ends are truncated first. If `start` lies after `end` the result is
/// just the truncated `start`.
pub fn expand(start: DateTime<Utc>, end: DateTime<Utc>, resolution: Resolution) -> Vec<DateTime<Utc>> {
    let end = resolution.truncate(end);
    let mut current = resolution.truncate(start);
    let mut out = vec![current];

    while current < end {
        match resolution.step(current) {
            Some(next) => {
                current = next;
                out.push(current);
            }
            None => break,
        }
    }

    out
}

/// Fills missing buckets of an ascending, de-duplicated series with zero totals.
///
/// Returns `None` for fewer than two points; there's no axis to fill then.
pub fn fill_gaps(series: &[TimePoint], resolution: Resolution) -> Option<Vec<TimePoint>> {
    let (first, last) = match series {
        [first, .., last] => (first, last),
        _ => return None,
    };

    let totals: HashMap<DateTime<Utc>, f64> = series.iter().map(|p| (p.date, p.total)).collect();

    Some(
        expand(first.date, last.date, resolution)
            .into_iter()
            .map(|date| TimePoint {
                date,
                total: totals.get(&date).copied().unwrap_or(0.0),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn expands_days_inclusive() {
        let days = expand(
            Utc.with_ymd_and_hms(2024, 2, 27, 13, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap(),
            Resolution::Day,
        );
        assert_eq!(
            days,
            vec![ymd(2024, 2, 27), ymd(2024, 2, 28), ymd(2024, 2, 29), ymd(2024, 3, 1)]
        );
    }

    #[test]
    fn expands_months_across_varying_lengths() {
        let months = expand(ymd(2023, 11, 30), ymd(2024, 3, 2), Resolution::Month);
        assert_eq!(
            months,
            vec![
                ymd(2023, 11, 1),
                ymd(2023, 12, 1),
                ymd(2024, 1, 1),
                ymd(2024, 2, 1),
                ymd(2024, 3, 1),
            ]
        );
    }

    #[test]
    fn expands_years() {
        let years = expand(ymd(2019, 6, 1), ymd(2021, 2, 1), Resolution::Year);
        assert_eq!(years, vec![ymd(2019, 1, 1), ymd(2020, 1, 1), ymd(2021, 1, 1)]);
    }

    #[test]
    fn same_bucket_yields_single_timestamp() {
        let out = expand(ymd(2022, 5, 3), ymd(2022, 5, 30), Resolution::Month);
        assert_eq!(out, vec![ymd(2022, 5, 1)]);
    }

    #[test]
    fn reversed_range_yields_start_only() {
        let out = expand(ymd(2022, 5, 3), ymd(2022, 5, 1), Resolution::Day);
        assert_eq!(out, vec![ymd(2022, 5, 3)]);
    }

    #[test]
    fn fills_missing_days_with_zero() {
        let series = [
            TimePoint { date: ymd(2023, 1, 1), total: 10.0 },
            TimePoint { date: ymd(2023, 1, 4), total: 4.0 },
        ];
        let filled = fill_gaps(&series, Resolution::Day).unwrap();
        let totals: Vec<f64> = filled.iter().map(|p| p.total).collect();
        assert_eq!(totals, vec![10.0, 0.0, 0.0, 4.0]);
        assert_eq!(filled[2].date, ymd(2023, 1, 3));
    }

    #[test]
    fn short_series_is_not_filled() {
        assert!(fill_gaps(&[], Resolution::Day).is_none());
        let one = [TimePoint { date: ymd(2023, 1, 1), total: 1.0 }];
        assert!(fill_gaps(&one, Resolution::Day).is_none());
    }

    #[test]
    fn time_point_serializes_date_as_millis() {
        let p = TimePoint { date: ymd(2021, 1, 1), total: 2.5 };
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"date":1609459200000,"total":2.5}"#);
    }

    proptest! {
        #[test]
        fn prop_expansion_is_aligned_and_bounded(
            start in 0i64..2_000_000_000,
            span in 0i64..400_000_000,
            pick in 0usize..3,
        ) {
            let resolution = [Resolution::Day, Resolution::Month, Resolution::Year][pick];
            let start = DateTime::from_timestamp(start, 0).unwrap();
            let end = DateTime::from_timestamp(start.timestamp() + span, 0).unwrap();
            let out = expand(start, end, resolution);

            prop_assert!(!out.is_empty());
            prop_assert_eq!(out[0], resolution.truncate(start));
            prop_assert_eq!(*out.last().unwrap(), resolution.truncate(end));
            for ts in &out {
                prop_assert_eq!(resolution.truncate(*ts), *ts);
            }
            for pair in out.windows(2) {
                prop_assert_eq!(resolution.step(pair[0]), Some(pair[1]));
            }
        }
    }
}
