//! Search modes accepted by the lookup resolver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidQueryReason, LookupError};
use crate::record::StudentRecord;

/// Outcome of a single lookup against the record store.
pub type LookupResult<'a> = std::result::Result<&'a StudentRecord, LookupError>;

/// How a raw query string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Match the serial number (`StudentId`) exactly.
    Id,
    /// Match the normalized trailing phone digits.
    Phone,
}

impl SearchMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "phone" => Ok(Self::Phone),
            _ => Err(LookupError::InvalidQuery {
                query: s.to_string(),
                reason: InvalidQueryReason::UnsupportedMode,
            }),
        }
    }
}
