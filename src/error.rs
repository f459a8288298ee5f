use thiserror::Error;

/// Failures reported by the simulation core.
///
/// Neither variant is expected during normal interactive use: keys are only
/// produced by [`CellKey::encode`](crate::CellKey::encode), and configuration
/// values are validated once at the boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// A cell key is missing the delimiter or one of its halves is not an integer.
    #[error("malformed cell key {0:?}")]
    MalformedKey(String),
    /// A configuration value that must be positive was zero.
    #[error("{field} must be a positive integer, got {value}")]
    InvalidConfiguration { field: &'static str, value: u64 },
}
