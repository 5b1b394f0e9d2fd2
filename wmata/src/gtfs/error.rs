//! Static dataset error types.

/// Errors from the bundled GTFS dataset reader.
#[derive(Debug, thiserror::Error)]
pub enum GtfsError {
    /// The underlying sqlite operation failed
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
