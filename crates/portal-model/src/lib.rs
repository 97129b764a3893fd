//! Data model for the exam results portal.
//!
//! Holds the normalized [`StudentRecord`], its unique [`StudentId`] key, the
//! [`SearchMode`] a lookup runs in, and the [`LookupError`] taxonomy returned
//! to the request surface.

pub mod error;
pub mod ids;
pub mod lookup;
pub mod record;

pub use error::{InvalidQueryReason, LookupError};
pub use ids::StudentId;
pub use lookup::{LookupResult, SearchMode};
pub use record::{StudentRecord, format_score};
