//! Identifier normalization.
//!
//! Raw identifiers arrive as Western digits, Arabic-Indic digits, or a mix of
//! either with stray punctuation. They are reduced to ASCII digits and parsed;
//! rows that cannot be resolved get synthetic identifiers above the largest
//! parsed one.

use std::collections::HashSet;

use tracing::warn;

use crate::error::{NormalizeError, Result};

/// Maps Arabic-Indic (U+0660..U+0669) and Extended Arabic-Indic
/// (U+06F0..U+06F9) digits to their ASCII equivalents.
fn western_digit(ch: char) -> Option<char> {
    match ch {
        '\u{0660}'..='\u{0669}' => char::from_digit(ch as u32 - 0x0660, 10),
        '\u{06F0}'..='\u{06F9}' => char::from_digit(ch as u32 - 0x06F0, 10),
        _ => None,
    }
}

/// Replaces Arabic-Indic digits with Western digits, leaving everything else.
pub fn translate_arabic_digits(raw: &str) -> String {
    raw.chars().map(|ch| western_digit(ch).unwrap_or(ch)).collect()
}

/// Translates Arabic-Indic digits and drops every non-digit character.
pub fn extract_digits(raw: &str) -> String {
    raw.chars()
        .map(|ch| western_digit(ch).unwrap_or(ch))
        .filter(char::is_ascii_digit)
        .collect()
}

/// Parses a single raw identifier.
///
/// Returns `None` when the value is missing, holds no digits, or does not fit
/// in a `u64`.
pub fn parse_identifier(raw: Option<&str>) -> Option<u64> {
    let digits = extract_digits(raw?);
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok()
}

/// Result of resolving a whole identifier column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierAssignment {
    /// One identifier per input row, unique across the column.
    pub ids: Vec<u64>,
    /// Rows that received a synthetic identifier (missing, unparseable or duplicate).
    pub synthetic: usize,
    /// Rows whose parsed identifier was already taken by an earlier row.
    pub duplicates: usize,
}

/// Resolves an identifier column.
///
/// Parsed values are kept in row order; the first row claiming a value owns
/// it. Every other row is numbered sequentially from `max(parsed) + 1` (or
/// from 1 when nothing parsed), in the order the rows appear.
pub fn assign_identifiers(raw: &[Option<String>]) -> Result<IdentifierAssignment> {
    let parsed: Vec<Option<u64>> = raw
        .iter()
        .map(|value| parse_identifier(value.as_deref()))
        .collect();

    let mut seen = HashSet::with_capacity(parsed.len());
    let mut resolved = Vec::with_capacity(parsed.len());
    let mut duplicates = 0usize;
    for (row, id) in parsed.iter().enumerate() {
        match id {
            Some(id) if seen.insert(*id) => resolved.push(Some(*id)),
            Some(id) => {
                duplicates += 1;
                warn!(row, id = *id, "duplicate student id, assigning a synthetic id");
                resolved.push(None);
            }
            None => resolved.push(None),
        }
    }

    let max_id = seen.iter().copied().max().unwrap_or(0);
    let unresolved = resolved.iter().filter(|id| id.is_none()).count();
    if unresolved > 0 {
        let overflow = NormalizeError::IdentifierOverflow { max_id, unresolved };
        let span = u64::try_from(unresolved).map_err(|_| overflow.clone())?;
        max_id.checked_add(span).ok_or(overflow)?;
    }

    let mut next = max_id.saturating_add(1);
    let ids = resolved
        .into_iter()
        .map(|id| {
            id.unwrap_or_else(|| {
                let synthetic = next;
                next = next.saturating_add(1);
                synthetic
            })
        })
        .collect();

    Ok(IdentifierAssignment {
        ids,
        synthetic: unresolved,
        duplicates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn arabic_digits_match_western() {
        assert_eq!(parse_identifier(Some("١٢٣")), Some(123));
        assert_eq!(parse_identifier(Some("123")), Some(123));
        assert_eq!(parse_identifier(Some("۴۵")), Some(45));
        assert_eq!(translate_arabic_digits("رقم ٤٢"), "رقم 42");
    }

    #[test]
    fn strips_noise_before_parsing() {
        assert_eq!(parse_identifier(Some(" #1-2 ")), Some(12));
        assert_eq!(parse_identifier(Some("abc")), None);
        assert_eq!(parse_identifier(Some("")), None);
        assert_eq!(parse_identifier(None), None);
    }

    #[test]
    fn oversized_identifier_is_unresolved() {
        assert_eq!(parse_identifier(Some("99999999999999999999999")), None);
    }

    #[test]
    fn synthetic_ids_follow_max() {
        let raw = column(&[Some("5"), None, Some("٩"), Some("x"), Some("2")]);
        let assignment = assign_identifiers(&raw).unwrap();
        assert_eq!(assignment.ids, vec![5, 10, 9, 11, 2]);
        assert_eq!(assignment.synthetic, 2);
        assert_eq!(assignment.duplicates, 0);
    }

    #[test]
    fn all_unresolved_starts_at_one() {
        let raw = column(&[None, Some("-"), None]);
        let assignment = assign_identifiers(&raw).unwrap();
        assert_eq!(assignment.ids, vec![1, 2, 3]);
        assert_eq!(assignment.synthetic, 3);
    }

    #[test]
    fn duplicate_ids_are_reassigned() {
        let raw = column(&[Some("3"), Some("٣"), Some("1")]);
        let assignment = assign_identifiers(&raw).unwrap();
        assert_eq!(assignment.ids, vec![3, 4, 1]);
        assert_eq!(assignment.duplicates, 1);
        assert_eq!(assignment.synthetic, 1);
    }

    #[test]
    fn empty_column_is_fine() {
        let assignment = assign_identifiers(&[]).unwrap();
        assert!(assignment.ids.is_empty());
        assert_eq!(assignment.synthetic, 0);
    }

    #[test]
    fn overflow_is_reported() {
        let raw = column(&[Some("18446744073709551615"), None]);
        let err = assign_identifiers(&raw).unwrap_err();
        assert!(matches!(err, NormalizeError::IdentifierOverflow { .. }));
    }
}
