//! Storage-specific error type wrapping file and schema errors.

use rentalhub_domain::error::RentalHubError;

/// Errors originating from the JSON flat-file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the dataset file failed.
    #[error("dataset file error")]
    Io(#[from] std::io::Error),

    /// The dataset is not valid JSON.
    #[error("dataset JSON error")]
    Json(#[from] serde_json::Error),

    /// A record's `locado` flag disagrees with its lease fields.
    #[error("invalid record for unit {unit}: {reason}")]
    Schema {
        /// Identifier of the offending record.
        unit: String,
        /// What the record got wrong.
        reason: &'static str,
    },
}

impl From<StorageError> for RentalHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
