//! Exam results ingestion.
//!
//! Loads the results sheet (an Excel workbook or a CSV export) into a Polars
//! `DataFrame` with every column kept as text, and checks that the fixed set
//! of source columns is present.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use portal_ingest::{SourceColumn, read_source, text_column};
//!
//! let df = read_source(Path::new("final_exam_results.xlsx"))?;
//! let phones = text_column(&df, SourceColumn::Phone)?;
//! ```

mod error;
mod reader;
mod schema;
mod values;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Source Reading ===
pub use reader::{read_source, validate_columns};

// === Schema ===
pub use schema::{SourceColumn, normalize_header};

// === Cell Access ===
pub use values::{any_to_string, raw_text_column, text_column};
