use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("timestamp {0}ms is outside the representable date range")]
    TimestampOutOfRange(i64),
}
