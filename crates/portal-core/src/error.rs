//! Startup load failures.

use thiserror::Error;

use portal_ingest::IngestError;
use portal_normalization::NormalizeError;

/// The record store could not be built from the source.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for BuildError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
