//! Fixed column layout of the results sheet.

/// A column the results sheet must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceColumn {
    Id,
    Name,
    NameEnglish,
    Phone,
    University,
    Year,
    /// Governorate the student comes from.
    Governorate,
    Score,
}

impl SourceColumn {
    /// Every required column, in sheet order.
    pub const ALL: [SourceColumn; 8] = [
        SourceColumn::Id,
        SourceColumn::Name,
        SourceColumn::NameEnglish,
        SourceColumn::Phone,
        SourceColumn::University,
        SourceColumn::Year,
        SourceColumn::Governorate,
        SourceColumn::Score,
    ];

    /// Header text as it appears in the sheet.
    pub const fn header(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::NameEnglish => "Name English",
            Self::Phone => "Phone Number",
            Self::University => "University",
            Self::Year => "Year",
            Self::Governorate => "From",
            Self::Score => "Score",
        }
    }
}

/// Trims a header cell, drops a stray BOM and collapses inner whitespace runs.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}
