//! The immutable, uniquely keyed record store.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{error, info};

use portal_ingest::read_source;
use portal_model::{StudentId, StudentRecord};
use portal_normalization::NormalizationTables;

use crate::builder::build_records;
use crate::error::Result;
use crate::report::BuildReport;

/// Student records keyed by [`StudentId`].
///
/// Constructed once at startup; there is no API to mutate it afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: BTreeMap<StudentId, StudentRecord>,
}

impl RecordStore {
    /// A store with no records. Every lookup against it reports not found.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the store from an already loaded sheet.
    pub fn from_dataframe(
        df: &DataFrame,
        tables: &NormalizationTables,
    ) -> Result<(Self, BuildReport)> {
        let (records, report) = build_records(df, tables)?;
        let records = records
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
        Ok((Self { records }, report))
    }

    /// Reads the sheet at `path` and builds the store.
    pub fn build(path: &Path, tables: &NormalizationTables) -> Result<(Self, BuildReport)> {
        let df = read_source(path)?;
        let (store, report) = Self::from_dataframe(&df, tables)?;
        info!(
            path = %path.display(),
            records = store.len(),
            synthetic_ids = report.synthetic_ids,
            "results sheet cleaned"
        );
        Ok((store, report))
    }

    /// Builds the store, falling back to an empty one if the source cannot
    /// be loaded. The failure is logged as critical.
    pub fn load_or_empty(path: &Path, tables: &NormalizationTables) -> Self {
        match Self::build(path, tables) {
            Ok((store, _)) => store,
            Err(err) => {
                error!(
                    severity = "critical",
                    path = %path.display(),
                    error = %err,
                    "failed to load results sheet, serving an empty store"
                );
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: StudentId) -> Option<&StudentRecord> {
        self.records.get(&id)
    }

    /// Every record whose normalized phone equals `phone` exactly.
    pub fn find_by_phone(&self, phone: &str) -> Vec<&StudentRecord> {
        self.records
            .values()
            .filter(|record| record.phone == phone)
            .collect()
    }
}
