use std::fmt;

/// Unique key of a student record.
///
/// Either parsed from the import's `ID` column or assigned synthetically when
/// the source value is missing, unparseable or already taken.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct StudentId(u64);

impl StudentId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
