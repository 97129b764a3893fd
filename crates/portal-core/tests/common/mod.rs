//! Shared fixtures for portal-core integration tests.

#![allow(dead_code)]

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use portal_core::RecordStore;
use portal_normalization::NormalizationTables;

pub const HEADERS: [&str; 8] = [
    "ID",
    "Name",
    "Name English",
    "Phone Number",
    "University",
    "Year",
    "From",
    "Score",
];

/// Builds a sheet from rows given in header order.
pub fn sheet(rows: &[[&str; 8]]) -> DataFrame {
    let cols: Vec<Column> = HEADERS
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            Series::new(
                (*name).into(),
                rows.iter()
                    .map(|row| row[idx].to_string())
                    .collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

pub fn store(rows: &[[&str; 8]]) -> RecordStore {
    let (store, _) =
        RecordStore::from_dataframe(&sheet(rows), &NormalizationTables::default()).unwrap();
    store
}

pub fn sample_rows() -> Vec<[&'static str; 8]> {
    vec![
        [
            "١",
            "أحمد، محمد",
            "Ahmed Mohamed",
            "010-1234-5678",
            "- جامعة المنصورة",
            "الاولي",
            "الدقهليه",
            "18",
        ],
        [
            "2",
            "سارة",
            "Sara",
            "+20 111 222 3333",
            "جامعة الزقازيق",
            "الثانية",
            "القاهرة",
            "15.5",
        ],
        [
            "",
            "منى",
            "Mona",
            "00201112223333",
            "جامعة طنطا",
            "",
            "الغربيه",
            "غائب",
        ],
        [
            "7",
            "علي",
            "Ali",
            "0100 000 0000",
            "كلية التجارة٫ جامعة بنها",
            "اولي",
            "",
            "20",
        ],
    ]
}
