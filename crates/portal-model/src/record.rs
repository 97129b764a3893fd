//! The normalized student record.

use serde::{Deserialize, Serialize};

use crate::ids::StudentId;

/// One row of the cleaned exam results table.
///
/// Built once by the record store and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Serial number, unique across the store.
    pub id: StudentId,
    /// Arabic name with punctuation removed.
    pub name: Option<String>,
    /// English name exactly as imported.
    pub name_english: Option<String>,
    /// Trailing phone digits (at most 11). Empty when the source had none.
    pub phone: String,
    pub university: Option<String>,
    /// Canonical academic year label.
    pub year: String,
    pub governorate: Option<String>,
    pub score: Option<f64>,
}

impl StudentRecord {
    /// Field labels and values in display order.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("رقم المسلسل", self.id.to_string()),
            ("الاسم", self.name.clone().unwrap_or_default()),
            (
                "الاسم بالإنجليزية",
                self.name_english.clone().unwrap_or_default(),
            ),
            ("رقم الهاتف", self.phone.clone()),
            ("الجامعة", self.university.clone().unwrap_or_default()),
            ("السنة الدراسية", self.year.clone()),
            ("المحافظة", self.governorate.clone().unwrap_or_default()),
            (
                "درجة الاختبار النهائي",
                self.score.map(format_score).unwrap_or_default(),
            ),
        ]
    }
}

/// Formats a score without trailing zeros (`15.0` -> `15`, `12.50` -> `12.5`).
pub fn format_score(value: f64) -> String {
    let s = format!("{value}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
