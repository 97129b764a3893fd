//! Statistics gathered while building the record store.

use std::collections::BTreeMap;

/// What the normalizers did to the sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Rows read from the source.
    pub rows: usize,
    /// Rows given a synthetic identifier.
    pub synthetic_ids: usize,
    /// Rows whose parsed identifier collided with an earlier row.
    pub duplicate_ids: usize,
    /// Rows left with no phone digits.
    pub missing_phones: usize,
    /// Rows whose year fell back to the default label.
    pub defaulted_years: usize,
    /// Records per canonical year label.
    pub year_counts: BTreeMap<String, usize>,
    /// Governorate values kept verbatim because no table entry matched.
    pub unmapped_governorates: BTreeMap<String, usize>,
    /// Rows with a missing or non-numeric score.
    pub missing_scores: usize,
}

impl BuildReport {
    pub fn has_fallbacks(&self) -> bool {
        self.synthetic_ids > 0
            || self.defaulted_years > 0
            || !self.unmapped_governorates.is_empty()
            || self.missing_scores > 0
    }
}
