use serde::Serialize;
use stats::bucket::sort_descending;
use stats::{
    CategoryStat, Resolution, TimePoint, fill_gaps, format_duration, max_by, merge_items, min_by,
    top_n,
};
use tracing::{debug, info};

use crate::charts::{self, CalendarDay, WeekdayTotal};
use crate::config::BoardConfig;
use crate::project_type::ProjectType;
use crate::snapshot::{GroupLatest, GroupStats, StatsSnapshot};

/// Chart-ready view of one stats snapshot.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub name: Option<String>,
    /// All-time group figures, passed through as delivered.
    pub summary: Option<GroupStats>,
    /// Last-30-day group figures, passed through as delivered.
    pub latest: Option<GroupLatest>,
    /// Swipes per day for the contribution heatmap.
    pub swipe_calendar: Vec<CalendarDay>,
    pub resolution: Resolution,
    /// One point per bucket with contributions, ascending.
    pub time_series: Vec<TimePoint>,
    /// `time_series` with empty buckets zero-filled; absent below two points.
    pub time_series_filled: Option<Vec<TimePoint>>,
    /// Labels matching `time_series_filled` point for point.
    pub axis_labels: Vec<String>,
    pub busiest: Option<Period>,
    pub quietest: Option<Period>,
    pub by_weekday: Vec<WeekdayTotal>,
    pub total_contribution: f64,
    pub total_contribution_label: Option<String>,
    pub swipes_by_mission: Vec<Slice>,
    pub total_swipes: Option<i64>,
    pub swipes_by_organization: Vec<Slice>,
    pub total_swipes_by_organization: Option<i64>,
    pub build_area_total_area: Option<f64>,
    pub footprint_swipes: Option<i64>,
    pub change_detection_swipes: Option<i64>,
}

/// A single bucket singled out from the series.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(flatten)]
    pub point: TimePoint,
    pub label: String,
    pub duration: String,
}

/// One pie slice.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Slice {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Board {
    pub fn build(snapshot: &StatsSnapshot, config: &BoardConfig) -> Self {
        let raw_times = snapshot.contribution_time.as_deref().unwrap_or_default();
        let resolution = config
            .resolution
            .unwrap_or_else(|| Resolution::for_series_len(raw_times.len()));
        info!(%resolution, entries = raw_times.len(), "building board");

        let time_series = charts::contribution_series(raw_times, resolution);
        let time_series_filled = fill_gaps(&time_series, resolution);
        let axis_labels = time_series_filled
            .iter()
            .flatten()
            .map(|p| resolution.label(p.date))
            .collect();

        let period = |point: &TimePoint| Period {
            point: *point,
            label: resolution.label(point.date),
            duration: format_duration(seconds(point.total), &config.duration),
        };
        let busiest = max_by(&time_series, |p| p.total).map(period);
        let quietest = min_by(&time_series, |p| p.total).map(period);

        let by_weekday = charts::weekday_totals(&time_series);
        let total_contribution: f64 = by_weekday.iter().map(|d| d.total).sum();
        let total_contribution_label = (total_contribution > 0.0)
            .then(|| format_duration(seconds(total_contribution), &config.duration));

        let swipes_by_mission = mission_slices(snapshot);
        let total_swipes = snapshot
            .project_swipe_type
            .as_ref()
            .map(|stats| stats.iter().map(|s| s.total_swipe).sum());

        let swipes_by_organization = organization_slices(snapshot, config);
        let total_swipes_by_organization = snapshot
            .organization_stats
            .as_ref()
            .map(|stats| stats.iter().map(|s| s.total_swipe.unwrap_or(0)).sum());

        let build_area_total_area = snapshot.project_type_stats.as_ref().and_then(|stats| {
            stats
                .iter()
                .filter(|s| ProjectType::from_code(s.project_type.as_deref()) == ProjectType::BuildArea)
                .map(|s| s.area)
                .reduce(|a, b| a + b)
        });

        let swipe_calendar =
            charts::swipe_calendar(snapshot.contribution_stats.as_deref().unwrap_or_default());

        Board {
            name: snapshot.name.clone(),
            summary: snapshot.stats.clone(),
            latest: snapshot.user_group_latest.clone(),
            swipe_calendar,
            resolution,
            time_series,
            time_series_filled,
            axis_labels,
            busiest,
            quietest,
            by_weekday,
            total_contribution,
            total_contribution_label,
            swipes_by_mission,
            total_swipes,
            swipes_by_organization,
            total_swipes_by_organization,
            build_area_total_area,
            footprint_swipes: swipes_for(snapshot, ProjectType::Footprint),
            change_detection_swipes: swipes_for(snapshot, ProjectType::ChangeDetection),
        }
    }
}

fn seconds(total: f64) -> u64 {
    total.max(0.0).round() as u64
}

/// Swipes for one mission type, summed over every row that maps to it.
fn swipes_for(snapshot: &StatsSnapshot, project_type: ProjectType) -> Option<i64> {
    snapshot.project_swipe_type.as_ref().and_then(|stats| {
        stats
            .iter()
            .filter(|s| ProjectType::from_code(s.project_type.as_deref()) == project_type)
            .map(|s| s.total_swipe)
            .reduce(|a, b| a + b)
    })
}

/// Label fallbacks can map distinct raw rows onto one key; sum them so each
/// key appears once.
fn merge_by_key(rows: Vec<CategoryStat>) -> Vec<CategoryStat> {
    merge_items(
        rows,
        |row| row.key.clone(),
        |prev, item, _| CategoryStat {
            measure: prev.measure + item.measure,
            ..prev.clone()
        },
    )
}

/// Swipes per mission type, largest first, colored by type. Never bucketed;
/// there are only a handful of types.
fn mission_slices(snapshot: &StatsSnapshot) -> Vec<Slice> {
    let Some(stats) = snapshot.project_swipe_type.as_ref() else {
        return Vec::new();
    };

    let rows: Vec<CategoryStat> = stats
        .iter()
        .map(|s| {
            let project_type = ProjectType::from_code(s.project_type.as_deref());
            CategoryStat::new(
                project_type.code(),
                project_type.display_name(),
                s.total_swipe as f64,
            )
        })
        .collect();
    let mut rows = merge_by_key(rows);
    sort_descending(&mut rows);

    rows.into_iter()
        .map(|row| {
            let color = ProjectType::from_code(Some(row.key.as_str())).color().to_owned();
            Slice {
                key: row.key,
                label: row.label,
                value: row.measure,
                color,
            }
        })
        .collect()
}

/// Swipes per organization, with the long tail folded into "Others".
fn organization_slices(snapshot: &StatsSnapshot, config: &BoardConfig) -> Vec<Slice> {
    let Some(stats) = snapshot.organization_stats.as_ref() else {
        return Vec::new();
    };

    let rows: Vec<CategoryStat> = stats
        .iter()
        .map(|s| {
            let name = match s.organization_name.as_deref() {
                Some(name) if !name.is_empty() => name,
                _ => config.unknown_label.as_str(),
            };
            CategoryStat::new(name, name, s.total_swipe.unwrap_or(0) as f64)
        })
        .collect();
    let rows = merge_by_key(rows);

    let total_rows = rows.len();
    let rows = top_n(rows, config.visible_categories, &config.others_label);
    if rows.len() < total_rows {
        debug!(
            folded = total_rows + 1 - rows.len(),
            "folded organizations into {}", config.others_label
        );
    }

    let colors = config.palette.assign(rows.iter().map(|r| r.label.as_str()));
    rows.into_iter()
        .map(|row| Slice {
            color: colors.color_for(&row.label).to_owned(),
            key: row.key,
            label: row.label,
            value: row.measure,
        })
        .collect()
}
