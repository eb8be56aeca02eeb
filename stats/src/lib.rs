//! Pure shaping helpers that turn raw contribution statistics into
//! chart-ready series and breakdowns.

pub mod bucket;
pub mod duration;
pub mod error;
pub mod extremum;
pub mod merge;
pub mod palette;
pub mod range;
pub mod resolution;

pub use bucket::{CategoryStat, top_n};
pub use duration::{DurationFormat, DurationUnit, format_duration};
pub use error::StatsError;
pub use extremum::{max_by, min_by};
pub use merge::merge_items;
pub use palette::{ColorMap, Palette};
pub use range::{TimePoint, expand, fill_gaps};
pub use resolution::Resolution;
