//! Polars `AnyValue` helpers for pulling text cells out of the sheet.

use polars::prelude::{AnyValue, DataFrame};

use crate::error::{IngestError, Result};
use crate::schema::SourceColumn;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`. Floats are printed without trailing
/// zeros so a numeric cell reads the same as its text form.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => f64::from(v).to_string(),
        AnyValue::Float64(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Reads one source column as trimmed text; empty and null cells are `None`.
pub fn text_column(df: &DataFrame, column: SourceColumn) -> Result<Vec<Option<String>>> {
    column_values(df, column, |raw| {
        let trimmed = raw.trim().trim_matches('\u{feff}');
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

/// Reads one source column exactly as imported. Only empty and null cells
/// become `None`; surrounding whitespace is kept.
pub fn raw_text_column(df: &DataFrame, column: SourceColumn) -> Result<Vec<Option<String>>> {
    column_values(df, column, |raw| (!raw.is_empty()).then_some(raw))
}

fn column_values<F>(df: &DataFrame, column: SourceColumn, convert: F) -> Result<Vec<Option<String>>>
where
    F: Fn(String) -> Option<String>,
{
    let col = df
        .column(column.header())
        .map_err(|_| IngestError::ColumnNotFound {
            column: column.header().to_string(),
        })?;
    let mut values = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        values.push(convert(any_to_string(col.get(row_idx)?)));
    }
    Ok(values)
}
