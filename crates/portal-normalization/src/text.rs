//! Free-text cleanup for name and university cells.

use std::sync::LazyLock;

use regex::Regex;

/// Anything that is neither alphanumeric, `_` nor whitespace.
///
/// Alphanumeric means letters and numbers only. `\w` would also admit
/// combining marks, and Arabic harakat must be removed with the punctuation.
static NON_WORD_OR_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("Invalid punctuation regex"));

/// Leading run of characters that are not alphanumeric or `_`.
static LEADING_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\p{L}\p{N}_]+").expect("Invalid leading non-word regex"));

/// Removes punctuation, symbols and combining marks, keeping letters, digits,
/// `_` and whitespace. Inner spacing is left untouched.
pub fn strip_punctuation(raw: &str) -> String {
    NON_WORD_OR_SPACE.replace_all(raw, "").into_owned()
}

/// Normalizes the Arabic decimal separator and full-width comma to `,`, then
/// strips leading non-word characters.
pub fn clean_university(raw: &str) -> String {
    let commas: String = raw
        .chars()
        .map(|ch| match ch {
            '\u{066B}' | '\u{FF0C}' => ',',
            other => other,
        })
        .collect();
    LEADING_NON_WORD.replace(&commas, "").into_owned()
}
