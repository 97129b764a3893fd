//! Categorical normalization against fixed variant tables.

use std::collections::HashMap;

use crate::tables::{DEFAULT_YEAR_LABEL, GOVERNORATE_VARIANTS, YEAR_VARIANTS};

/// What happens to a value that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// Keep unmapped values verbatim; missing stays missing.
    PassThrough,
    /// Replace unmapped and missing values with this label.
    Default(String),
}

/// How a single raw value was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Categorized {
    /// Found in the table.
    Mapped(String),
    /// Unmapped, kept as-is.
    PassedThrough(String),
    /// Unmapped or missing, replaced by the default label.
    Defaulted(String),
    /// Missing, and the fallback does not supply a value.
    Missing,
}

impl Categorized {
    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Mapped(value) | Self::PassedThrough(value) | Self::Defaulted(value) => {
                Some(value)
            }
            Self::Missing => None,
        }
    }
}

/// Exact-match variant table plus a fallback policy.
#[derive(Debug, Clone)]
pub struct CategoricalMapping {
    variants: HashMap<String, String>,
    fallback: Fallback,
}

impl CategoricalMapping {
    pub fn new<I, K, V>(variants: I, fallback: Fallback) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            variants: variants
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            fallback,
        }
    }

    /// Academic year table; anything unmapped becomes [`DEFAULT_YEAR_LABEL`].
    pub fn year() -> Self {
        Self::new(
            YEAR_VARIANTS.iter().copied(),
            Fallback::Default(DEFAULT_YEAR_LABEL.to_string()),
        )
    }

    /// Governorate table; unmapped spellings pass through.
    pub fn governorate() -> Self {
        Self::new(GOVERNORATE_VARIANTS.iter().copied(), Fallback::PassThrough)
    }

    /// Resolves a value and reports which branch was taken.
    pub fn categorize(&self, raw: Option<&str>) -> Categorized {
        if let Some(mapped) = raw.and_then(|value| self.variants.get(value)) {
            return Categorized::Mapped(mapped.clone());
        }
        match (&self.fallback, raw) {
            (Fallback::Default(label), _) => Categorized::Defaulted(label.clone()),
            (Fallback::PassThrough, Some(value)) => Categorized::PassedThrough(value.to_string()),
            (Fallback::PassThrough, None) => Categorized::Missing,
        }
    }

    pub fn normalize(&self, raw: Option<&str>) -> Option<String> {
        self.categorize(raw).into_value()
    }
}

/// The categorical tables applied when building the record store.
#[derive(Debug, Clone)]
pub struct NormalizationTables {
    pub year: CategoricalMapping,
    pub governorate: CategoricalMapping,
}

impl NormalizationTables {
    pub fn new(year: CategoricalMapping, governorate: CategoricalMapping) -> Self {
        Self { year, governorate }
    }

    /// Year label for a raw cell. Total: never returns an empty answer.
    pub fn year_label(&self, raw: Option<&str>) -> Categorized {
        match self.year.categorize(raw) {
            Categorized::Missing => Categorized::Defaulted(DEFAULT_YEAR_LABEL.to_string()),
            other => other,
        }
    }
}

impl Default for NormalizationTables {
    fn default() -> Self {
        Self::new(CategoricalMapping::year(), CategoricalMapping::governorate())
    }
}
