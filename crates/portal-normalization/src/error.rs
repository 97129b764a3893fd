use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// Synthetic identifiers would run past `u64::MAX`.
    #[error("synthetic identifier overflow: {unresolved} rows need ids above {max_id}")]
    IdentifierOverflow { max_id: u64, unresolved: usize },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
