use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    /// Covers unreadable input as well as malformed JSON; serde_json reports both.
    #[error("malformed stats snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
