//! Lookup failure taxonomy.
//!
//! `Display` is an English diagnostic meant for the operational log;
//! [`LookupError::user_message`] is the Arabic text shown to the person
//! searching.

use std::fmt;

use thiserror::Error;

use crate::lookup::SearchMode;

/// Why a query was rejected before touching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidQueryReason {
    /// The query contained no digit characters.
    NoDigits,
    /// The search mode was neither `id` nor `phone`.
    UnsupportedMode,
}

impl fmt::Display for InvalidQueryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDigits => f.write_str("no digits in query"),
            Self::UnsupportedMode => f.write_str("unsupported search mode"),
        }
    }
}

/// Errors returned by the lookup resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("invalid query '{query}': {reason}")]
    InvalidQuery {
        query: String,
        reason: InvalidQueryReason,
    },

    #[error("no student found by {mode} '{key}'")]
    NotFound { mode: SearchMode, key: String },

    #[error("{count} students share phone number '{phone}'")]
    Ambiguous { phone: String, count: usize },

    #[error("unexpected lookup failure: {detail}")]
    Unexpected { detail: String },
}

impl LookupError {
    /// Short machine-readable kind, used in logs and JSON responses.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidQuery { .. } => "invalid_query",
            Self::NotFound { .. } => "not_found",
            Self::Ambiguous { .. } => "ambiguous",
            Self::Unexpected { .. } => "unexpected",
        }
    }

    /// Message rendered to the end user. Never carries internal detail.
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidQuery {
                reason: InvalidQueryReason::NoDigits,
                ..
            } => "يرجى إدخال رقم صحيح",
            Self::InvalidQuery {
                reason: InvalidQueryReason::UnsupportedMode,
                ..
            } => "طريقة البحث غير مدعومة",
            Self::NotFound {
                mode: SearchMode::Id,
                ..
            } => "لم يتم العثور على الطالب بالرقم المحدد",
            Self::NotFound {
                mode: SearchMode::Phone,
                ..
            } => "لا يوجد طالب بهذا الرقم",
            Self::Ambiguous { .. } => "يوجد أكثر من طالب بنفس رقم الهاتف",
            Self::Unexpected { .. } => "حدث خطأ غير متوقع",
        }
    }
}
