//! Column-wise normalization of the results sheet into student records.

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use portal_ingest::{SourceColumn, raw_text_column, text_column};
use portal_model::{StudentId, StudentRecord};
use portal_normalization::{
    Categorized, DEFAULT_YEAR_LABEL, NormalizationTables, assign_identifiers, clean_university,
    normalize_phone, strip_punctuation, translate_arabic_digits,
};

use crate::error::Result;
use crate::report::BuildReport;

fn cell(column: &[Option<String>], row: usize) -> Option<&str> {
    column.get(row).and_then(|value| value.as_deref())
}

/// Parses a score cell, accepting Arabic-Indic digits and the Arabic decimal separator.
pub(crate) fn parse_score(raw: Option<&str>) -> Option<f64> {
    let normalized: String = translate_arabic_digits(raw?)
        .chars()
        .map(|ch| if ch == '\u{066B}' { '.' } else { ch })
        .collect();
    normalized
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Applies the normalizers to every row of the sheet.
///
/// Per-row problems never fail the build: bad identifiers get synthetic ones,
/// unmapped categories fall back, unparseable scores become `None`. Only a
/// missing column or an exhausted identifier space is an error.
pub fn build_records(
    df: &DataFrame,
    tables: &NormalizationTables,
) -> Result<(Vec<StudentRecord>, BuildReport)> {
    let ids = text_column(df, SourceColumn::Id)?;
    let names = text_column(df, SourceColumn::Name)?;
    // English names and governorates reach the record exactly as imported.
    let names_english = raw_text_column(df, SourceColumn::NameEnglish)?;
    let phones = text_column(df, SourceColumn::Phone)?;
    let universities = text_column(df, SourceColumn::University)?;
    let years = text_column(df, SourceColumn::Year)?;
    let governorates = raw_text_column(df, SourceColumn::Governorate)?;
    let scores = text_column(df, SourceColumn::Score)?;

    let assignment = assign_identifiers(&ids)?;
    let mut report = BuildReport {
        rows: df.height(),
        synthetic_ids: assignment.synthetic,
        duplicate_ids: assignment.duplicates,
        ..BuildReport::default()
    };

    let mut records = Vec::with_capacity(assignment.ids.len());
    for (row, id) in assignment.ids.iter().copied().enumerate() {
        let phone = normalize_phone(cell(&phones, row));
        if phone.is_empty() {
            report.missing_phones += 1;
        }

        let year = match tables.year_label(cell(&years, row)) {
            Categorized::Defaulted(label) => {
                report.defaulted_years += 1;
                label
            }
            other => other
                .into_value()
                .unwrap_or_else(|| DEFAULT_YEAR_LABEL.to_string()),
        };
        *report.year_counts.entry(year.clone()).or_default() += 1;

        let governorate = match tables.governorate.categorize(cell(&governorates, row)) {
            Categorized::PassedThrough(value) => {
                *report
                    .unmapped_governorates
                    .entry(value.clone())
                    .or_default() += 1;
                Some(value)
            }
            other => other.into_value(),
        };

        let raw_score = cell(&scores, row);
        let score = parse_score(raw_score);
        if score.is_none() {
            report.missing_scores += 1;
            if let Some(raw) = raw_score {
                warn!(row, id, score = raw, "score is not numeric");
            }
        }

        records.push(StudentRecord {
            id: StudentId::new(id),
            name: cell(&names, row).map(strip_punctuation),
            name_english: cell(&names_english, row).map(str::to_string),
            phone,
            university: cell(&universities, row).map(clean_university),
            year,
            governorate,
            score,
        });
    }

    debug!(
        rows = report.rows,
        synthetic_ids = report.synthetic_ids,
        defaulted_years = report.defaulted_years,
        "normalized results sheet"
    );
    Ok((records, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scores() {
        assert_eq!(parse_score(Some("17")), Some(17.0));
        assert_eq!(parse_score(Some("١٨٫٥")), Some(18.5));
        assert_eq!(parse_score(Some(" 9.25 ")), Some(9.25));
        assert_eq!(parse_score(Some("غائب")), None);
        assert_eq!(parse_score(Some("NaN")), None);
        assert_eq!(parse_score(None), None);
    }
}
