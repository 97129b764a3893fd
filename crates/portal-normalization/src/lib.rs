//! Column normalizers for the exam results sheet.
//!
//! Every function here is pure: it takes raw cell text (already trimmed, with
//! `None` for a missing cell) and returns the canonical value. The record
//! store applies them column by column.

pub mod categorical;
pub mod error;
pub mod identifier;
pub mod phone;
pub mod tables;
pub mod text;

pub use categorical::{CategoricalMapping, Categorized, Fallback, NormalizationTables};
pub use error::{NormalizeError, Result};
pub use identifier::{
    IdentifierAssignment, assign_identifiers, extract_digits, parse_identifier,
    translate_arabic_digits,
};
pub use phone::{PHONE_DIGITS, normalize_phone, trailing_digits};
pub use tables::{DEFAULT_YEAR_LABEL, GOVERNORATE_VARIANTS, YEAR_VARIANTS};
pub use text::{clean_university, strip_punctuation};
