//! Error types for exam results ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the results sheet (CSV or workbook).
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Workbook Errors ===
    /// Failed to open an Excel workbook.
    #[error("failed to open workbook {path}: {message}")]
    WorkbookOpen { path: PathBuf, message: String },

    /// Workbook contains no worksheets.
    #[error("workbook has no worksheets: {path}")]
    NoWorksheet { path: PathBuf },

    /// Failed to read the cells of a worksheet.
    #[error("failed to read worksheet '{sheet}' in {path}: {message}")]
    WorksheetRead {
        path: PathBuf,
        sheet: String,
        message: String,
    },

    /// Worksheet has no header row.
    #[error("worksheet '{sheet}' is empty: {path}")]
    EmptyWorksheet { path: PathBuf, sheet: String },

    /// Source file has no content at all (not even a header row).
    #[error("source file is empty: {path}")]
    EmptySource { path: PathBuf },

    // === Schema Errors ===
    /// Required column not found in the source.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    // === DataFrame Errors ===
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
