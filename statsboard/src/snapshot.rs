//! Query results as delivered by the stats API. Every list and most fields
//! may be absent; defaults are applied during board assembly, never here.
//! Dates stay raw strings so one bad value only costs its own row.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub name: Option<String>,
    pub stats: Option<GroupStats>,
    pub user_group_latest: Option<GroupLatest>,
    pub contribution_stats: Option<Vec<DailySwipes>>,
    pub contribution_time: Option<Vec<ContributionTime>>,
    pub project_type_stats: Option<Vec<ProjectTypeArea>>,
    pub project_swipe_type: Option<Vec<ProjectTypeSwipes>>,
    pub organization_stats: Option<Vec<OrganizationSwipes>>,
    pub user_stats: Option<Vec<MemberStats>>,
}

/// All-time group figures.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub total_swipe: Option<i64>,
    /// Minutes.
    pub total_swipe_time: Option<i64>,
    pub total_contributors: Option<i64>,
    pub total_mapping_projects: Option<i64>,
}

/// Group figures over the last 30 days.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupLatest {
    pub total_swipes: Option<i64>,
    /// Minutes.
    pub total_swipe_time: Option<i64>,
    pub total_contributors: Option<i64>,
}

/// Swipes made on one day, `YYYY-MM-DD`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DailySwipes {
    pub task_date: Option<String>,
    pub total_swipe: Option<i64>,
}

/// Seconds spent contributing on one day, `YYYY-MM-DD`.
#[derive(Deserialize, Debug, Clone)]
pub struct ContributionTime {
    pub date: Option<String>,
    pub total: i64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTypeArea {
    pub project_type: Option<String>,
    /// Square kilometres reviewed.
    pub area: f64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTypeSwipes {
    pub project_type: Option<String>,
    pub total_swipe: i64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSwipes {
    pub organization_name: Option<String>,
    pub total_swipe: Option<i64>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub user_name: String,
    pub total_swipes: i64,
    pub total_mapping_projects: i64,
    /// Minutes.
    pub total_swipe_time: i64,
}

impl StatsSnapshot {
    pub fn from_reader(reader: impl Read) -> Result<Self, BoardError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
