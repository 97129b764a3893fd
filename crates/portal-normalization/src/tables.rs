//! Built-in spelling variant tables.
//!
//! Keys are matched exactly (case and diacritics included). Add a row here to
//! teach the portal a new spelling.

/// Academic year spellings seen in the sheet and their canonical label.
pub const YEAR_VARIANTS: &[(&str, &str)] = &[
    ("الاولي", "الأولى"),
    ("اولي", "الأولى"),
    ("الثانية", "الثانية"),
    ("الثالثة", "الثالثة"),
    ("الرابعة", "الرابعة"),
    ("غير ذلك", "أخرى"),
];

/// Label for any year value absent from [`YEAR_VARIANTS`], including missing.
pub const DEFAULT_YEAR_LABEL: &str = "أخرى";

/// Common governorate misspellings and their correction.
pub const GOVERNORATE_VARIANTS: &[(&str, &str)] = &[
    ("الدقهليه", "الدقهلية"),
    ("شرقيه", "الشرقية"),
    ("الشرقيه", "الشرقية"),
    ("الغربيه", "الغربية"),
];
