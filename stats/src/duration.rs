//! Human-readable durations such as `2 years 3 months` or `5 hrs 12 mins`.
//!
//! The formatter walks a fixed unit hierarchy from coarse to fine, skipping
//! leading units with a zero count. Once the first unit is emitted only
//! `stop` finer levels are considered, which keeps output like
//! `1 year 2 months 3 days 4 hours 5 minutes 6 seconds` down to
//! `1 year 2 months 3 days`.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl DurationUnit {
    /// Coarsest first.
    pub const ALL: [DurationUnit; 6] = [
        DurationUnit::Year,
        DurationUnit::Month,
        DurationUnit::Day,
        DurationUnit::Hour,
        DurationUnit::Minute,
        DurationUnit::Second,
    ];

    /// Fixed length of one unit. Months are 30 days and years 365 days.
    pub const fn seconds(self) -> u64 {
        match self {
            DurationUnit::Year => 365 * 24 * 60 * 60,
            DurationUnit::Month => 30 * 24 * 60 * 60,
            DurationUnit::Day => 24 * 60 * 60,
            DurationUnit::Hour => 60 * 60,
            DurationUnit::Minute => 60,
            DurationUnit::Second => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DurationUnit::Year => "year",
            DurationUnit::Month => "month",
            DurationUnit::Day => "day",
            DurationUnit::Hour => "hour",
            DurationUnit::Minute => "minute",
            DurationUnit::Second => "second",
        }
    }

    pub const fn short_name(self) -> &'static str {
        match self {
            DurationUnit::Year => "yr",
            DurationUnit::Month => "mo",
            DurationUnit::Day => "day",
            DurationUnit::Hour => "hr",
            DurationUnit::Minute => "min",
            DurationUnit::Second => "sec",
        }
    }

    const fn level(self) -> usize {
        self as usize
    }
}

/// Options for [`format_duration`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DurationFormat {
    /// Joins the unit phrases.
    pub separator: String,
    /// Use `yr`/`mo`/`hr`/... instead of full unit names.
    pub shorten: bool,
    /// Finer levels allowed after the first emitted unit.
    pub stop: usize,
    /// Unit the scan starts from. Anything coarser is folded into it, so with
    /// `Hour` a two-day duration reads `48 hours`.
    pub largest_unit: DurationUnit,
    /// Finest unit that may be emitted. Overrides `stop` when set.
    pub finest_unit: Option<DurationUnit>,
}

impl Default for DurationFormat {
    fn default() -> Self {
        DurationFormat {
            separator: " ".to_owned(),
            shorten: false,
            stop: 2,
            largest_unit: DurationUnit::Year,
            finest_unit: None,
        }
    }
}

impl DurationFormat {
    /// Abbreviated unit names, otherwise default options.
    pub fn short() -> Self {
        DurationFormat {
            shorten: true,
            ..Default::default()
        }
    }
}

/// Formats a number of seconds, e.g. `90061` as `1 day 1 hour 1 minute`.
///
/// Zero-count units are left out. A duration with nothing to show above the
/// seconds level still reports its seconds, so `0` formats as `"0"`.
pub fn format_duration(seconds: u64, format: &DurationFormat) -> String {
    let mut remaining = seconds;
    let mut boundary = format.finest_unit.map(DurationUnit::level);
    let mut fragments: Vec<String> = Vec::new();

    for unit in &DurationUnit::ALL[format.largest_unit.level()..] {
        if boundary.is_some_and(|last| unit.level() > last) {
            break;
        }

        let count = remaining / unit.seconds();
        remaining %= unit.seconds();

        if count > 0 {
            if fragments.is_empty() && format.finest_unit.is_none() {
                boundary = Some((unit.level() + format.stop).min(DurationUnit::Second.level()));
            }
            let name = if format.shorten {
                unit.short_name()
            } else {
                unit.name()
            };
            let plural = if count == 1 { "" } else { "s" };
            fragments.push(format!("{} {name}{plural}", group_thousands(count)));
        } else if *unit == DurationUnit::Second && fragments.is_empty() {
            fragments.push("0".to_owned());
        }
    }

    fragments.join(&format.separator)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(seconds: u64) -> String {
        format_duration(seconds, &DurationFormat::default())
    }

    #[test]
    fn zero_is_bare_zero() {
        assert_eq!(fmt(0), "0");
        assert_eq!(format_duration(0, &DurationFormat::short()), "0");
    }

    #[test]
    fn stops_two_levels_below_first_unit() {
        assert_eq!(fmt(90061), "1 day 1 hour 1 minute");
    }

    #[test]
    fn shortened_hour() {
        assert_eq!(format_duration(3600, &DurationFormat::short()), "1 hr");
    }

    #[test]
    fn pluralizes_counts_other_than_one() {
        assert_eq!(fmt(2 * 3600 + 120), "2 hours 2 minutes");
        assert_eq!(format_duration(2 * 3600 + 120, &DurationFormat::short()), "2 hrs 2 mins");
        assert_eq!(fmt(1), "1 second");
        assert_eq!(fmt(59), "59 seconds");
    }

    #[test]
    fn skips_zero_units_inside_window() {
        // 1 year + 3 days + 5 hours: month is zero, hour is past the window.
        let secs = DurationUnit::Year.seconds() + 3 * DurationUnit::Day.seconds() + 5 * 3600;
        assert_eq!(fmt(secs), "1 year 3 days");
    }

    #[test]
    fn caps_overly_precise_output() {
        let secs = DurationUnit::Year.seconds()
            + 2 * DurationUnit::Month.seconds()
            + 3 * DurationUnit::Day.seconds()
            + 4 * 3600
            + 5 * 60
            + 6;
        assert_eq!(fmt(secs), "1 year 2 months 3 days");
    }

    #[test]
    fn seconds_follow_minutes_when_in_window() {
        assert_eq!(fmt(61), "1 minute 1 second");
        assert_eq!(fmt(3661), "1 hour 1 minute 1 second");
    }

    #[test]
    fn custom_separator_and_stop() {
        let format = DurationFormat {
            separator: ", ".to_owned(),
            stop: 0,
            ..Default::default()
        };
        assert_eq!(format_duration(90061, &format), "1 day");

        let format = DurationFormat {
            separator: ", ".to_owned(),
            stop: 5,
            ..Default::default()
        };
        assert_eq!(format_duration(90061, &format), "1 day, 1 hour, 1 minute, 1 second");
    }

    #[test]
    fn explicit_finest_unit_overrides_stop() {
        let format = DurationFormat {
            finest_unit: Some(DurationUnit::Hour),
            ..Default::default()
        };
        assert_eq!(format_duration(90061, &format), "1 day 1 hour");
        // Nothing at or above an hour to show.
        assert_eq!(format_duration(125, &format), "");
    }

    #[test]
    fn largest_unit_folds_coarser_units() {
        let format = DurationFormat {
            largest_unit: DurationUnit::Hour,
            ..Default::default()
        };
        assert_eq!(format_duration(90061, &format), "25 hours 1 minute 1 second");
        assert_eq!(format_duration(12_345 * 3600, &format), "12,345 hours");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn partial_options_fill_from_defaults() {
        let format: DurationFormat = serde_json::from_str(r#"{"shorten": true, "largest_unit": "hour"}"#).unwrap();
        assert!(format.shorten);
        assert_eq!(format.largest_unit, DurationUnit::Hour);
        assert_eq!(format.stop, 2);
        assert_eq!(format.separator, " ");
    }
}
