//! Plate lookup error type.

/// Failure of a plate lookup.
///
/// Callers are expected to branch on `NotFound` versus everything else; the
/// status inside `FetchFailed` is informational only.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The service answered 404 for this plate.
    #[error("Vehicle not found with the provided plate number")]
    NotFound,
    /// The service answered with any other non-2xx status.
    #[error("Failed to fetch vehicle information (HTTP {status})")]
    FetchFailed { status: u32 },
    /// No usable response at all; the transport's own error, unclassified.
    #[error(transparent)]
    Transport(#[from] curl::Error),
    /// A 2xx response whose body is not a vehicle record.
    #[error("malformed vehicle record: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("lookup task join: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }
}
