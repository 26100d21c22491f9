use thiserror::Error;

/// Failures that can cross the playback-engine boundary.
///
/// None of these ever abort a frame: the session manager turns them into
/// idle visuals or status text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FestError {
    #[error("analysis tap unavailable: {0}")]
    TapUnavailable(String),
    #[error("failed to load '{src}': {reason}")]
    Load { src: String, reason: String },
}
