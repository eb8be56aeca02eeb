use serde::{Deserialize, Serialize};

/// One row of a categorical breakdown, e.g. swipes per organization.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CategoryStat {
    pub key: String,
    pub label: String,
    pub measure: f64,
}

impl CategoryStat {
    pub fn new(key: impl Into<String>, label: impl Into<String>, measure: f64) -> Self {
        CategoryStat {
            key: key.into(),
            label: label.into(),
            measure,
        }
    }
}

/// Sorts `stats` by descending measure, keeping input order among equal
/// measures.
pub fn sort_descending(stats: &mut [CategoryStat]) {
    stats.sort_by(|a, b| b.measure.total_cmp(&a.measure));
}

/// Keeps at most `visible` rows: when there are more, the top `visible - 1`
/// stay and the rest collapse into one synthetic `others_label` row holding
/// their summed measure.
///
/// A real row already keyed `others_label` is folded into the synthetic row
/// rather than kept beside it, so keys stay unique.
pub fn top_n(mut stats: Vec<CategoryStat>, visible: usize, others_label: &str) -> Vec<CategoryStat> {
    sort_descending(&mut stats);
    if stats.len() <= visible {
        return stats;
    }

    let (existing, mut head): (Vec<_>, Vec<_>) =
        stats.into_iter().partition(|s| s.key == others_label);
    let tail = head.split_off(visible.saturating_sub(1).min(head.len()));
    let others: f64 = existing.iter().chain(&tail).map(|s| s.measure).sum();
    head.push(CategoryStat::new(others_label, others_label, others));
    head
}
