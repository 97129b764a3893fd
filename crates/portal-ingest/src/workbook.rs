//! Excel workbook loading for the results sheet.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use crate::error::{IngestError, Result};

/// File extensions read through the workbook path.
const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "xlsb"];

/// True when `path` names an Excel workbook rather than delimited text.
pub(crate) fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(value) => Some(value.clone()),
        // Numeric cells print without a trailing `.0`, so an ID typed as a
        // number reads the same as its text form.
        other => Some(other.to_string()),
    }
}

fn is_blank(values: &[Option<String>]) -> bool {
    values
        .iter()
        .all(|value| value.as_deref().is_none_or(|text| text.trim().is_empty()))
}

/// Reads the first worksheet into a `DataFrame` of text columns.
///
/// The first row is the header. Fully blank rows are skipped, matching the
/// CSV reader. Header normalization and validation are left to the caller.
pub(crate) fn read_workbook(path: &Path) -> Result<DataFrame> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::WorkbookOpen {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::WorksheetRead {
            path: path.to_path_buf(),
            sheet: sheet.clone(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let header_row = rows.next().ok_or_else(|| IngestError::EmptyWorksheet {
        path: path.to_path_buf(),
        sheet: sheet.clone(),
    })?;
    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| match cell_text(cell) {
            Some(text) if !text.trim().is_empty() => text,
            _ => format!("column_{}", idx + 1),
        })
        .collect();

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for row in rows {
        let values: Vec<Option<String>> = row.iter().map(cell_text).collect();
        if is_blank(&values) {
            continue;
        }
        for (idx, column) in columns.iter_mut().enumerate() {
            column.push(values.get(idx).cloned().flatten());
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(columns)
        .map(|(name, values)| Series::new(name.as_str().into(), values).into_column())
        .collect();
    let df = DataFrame::new(columns)?;

    debug!(
        path = %path.display(),
        sheet = %sheet,
        rows = df.height(),
        "read worksheet"
    );
    Ok(df)
}
