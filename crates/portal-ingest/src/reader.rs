//! Loading the results sheet from CSV or an Excel workbook.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::schema::{SourceColumn, normalize_header};
use crate::workbook::{is_workbook, read_workbook};

fn check_readable(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() == 0 {
        return Err(IngestError::EmptySource {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Reads the results sheet into a `DataFrame`.
///
/// `.xlsx`, `.xlsm`, `.xls` and `.xlsb` files are read from their first
/// worksheet; anything else is parsed as CSV. Either way every column is
/// text, so phone numbers with leading zeros and mixed-script identifiers
/// reach the normalizers intact. Header names are whitespace-normalized and
/// the required columns checked.
pub fn read_source(path: &Path) -> Result<DataFrame> {
    check_readable(path)?;

    let mut df = if is_workbook(path) {
        read_workbook(path)?
    } else {
        read_csv(path)?
    };
    normalize_headers(&mut df)?;
    validate_columns(&df, path)?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded results sheet"
    );
    Ok(df)
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

fn normalize_headers(df: &mut DataFrame) -> Result<()> {
    let renames: Vec<(String, String)> = df
        .get_column_names()
        .into_iter()
        .map(|name| (name.to_string(), normalize_header(name)))
        .filter(|(raw, normalized)| raw != normalized)
        .collect();
    for (raw, normalized) in renames {
        df.rename(&raw, normalized.into())?;
    }
    Ok(())
}

/// Fails with [`IngestError::MissingColumn`] for the first absent required column.
pub fn validate_columns(df: &DataFrame, path: &Path) -> Result<()> {
    for column in SourceColumn::ALL {
        if df.column(column.header()).is_err() {
            return Err(IngestError::MissingColumn {
                column: column.header().to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "ID,Name,Name English,Phone Number,University,Year,From,Score";

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_source_keeps_text() {
        let file = create_temp_csv(&format!(
            "{HEADER}\n1,أحمد,Ahmed,01012345678,جامعة القاهرة,الاولي,الشرقيه,18\n"
        ));
        let df = read_source(file.path()).unwrap();

        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 8);
        let phone = df.column("Phone Number").unwrap().get(0).unwrap();
        assert_eq!(phone.get_str(), Some("01012345678"));
    }

    #[test]
    fn test_read_source_normalizes_headers() {
        let file = create_temp_csv(
            " ID ,Name,Name   English,Phone Number,University,Year,From,Score \n1,a,b,c,d,e,f,1\n",
        );
        let df = read_source(file.path()).unwrap();

        assert!(df.column("ID").is_ok());
        assert!(df.column("Name English").is_ok());
        assert!(df.column("Score").is_ok());
    }

    #[test]
    fn test_read_source_missing_column() {
        let file = create_temp_csv("ID,Name,Name English,University,Year,From,Score\n1,a,b,c,d,e,1\n");
        let result = read_source(file.path());

        match result {
            Err(IngestError::MissingColumn { column, .. }) => assert_eq!(column, "Phone Number"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_read_source_empty_file() {
        let file = create_temp_csv("");
        let result = read_source(file.path());

        assert!(matches!(result, Err(IngestError::EmptySource { .. })));
    }

    #[test]
    fn test_read_source_not_found() {
        let result = read_source(Path::new("/definitely/not/here/results.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_source_workbook() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("final_exam_results.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (col, header) in HEADER.split(',').enumerate() {
            let header = if col == 2 { " Name  English " } else { header };
            worksheet.write_string(0, col as u16, header).unwrap();
        }
        worksheet.write_number(1, 0, 7).unwrap();
        worksheet.write_string(1, 1, "علي").unwrap();
        worksheet.write_string(1, 3, "010-1234-5678").unwrap();
        worksheet.write_string(1, 5, "الاولي").unwrap();
        worksheet.write_number(1, 7, 19.5).unwrap();
        workbook.save(&path).unwrap();

        let df = read_source(&path).unwrap();

        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 8);
        assert!(df.column("Name English").is_ok());
        let id = df.column("ID").unwrap().get(0).unwrap();
        assert_eq!(id.get_str(), Some("7"));
        let score = df.column("Score").unwrap().get(0).unwrap();
        assert_eq!(score.get_str(), Some("19.5"));
    }

    #[test]
    fn test_read_source_workbook_missing_column() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("results.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "ID").unwrap();
        worksheet.write_number(1, 0, 1).unwrap();
        workbook.save(&path).unwrap();

        let result = read_source(&path);

        match result {
            Err(IngestError::MissingColumn { column, .. }) => assert_eq!(column, "Name"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }
}
