//! Record store and lookup resolution for the exam results portal.
//!
//! The store is built once from the results sheet, applying the column
//! normalizers, and is immutable afterwards. Lookups borrow it read-only, so
//! it can be shared across threads behind an `Arc` without locking.

pub mod builder;
pub mod error;
pub mod report;
pub mod resolver;
pub mod store;

pub use builder::build_records;
pub use error::{BuildError, Result};
pub use report::BuildReport;
pub use resolver::{log_outcome, resolve_request};
pub use store::RecordStore;
