use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use portal_core::BuildReport;
use portal_model::StudentRecord;

pub fn print_report(source: &Path, records: usize, report: &BuildReport) {
    println!("Source: {}", source.display());
    println!("Records: {records}");

    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    table.add_row(vec![Cell::new("Rows read"), Cell::new(report.rows)]);
    table.add_row(vec![
        Cell::new("Synthetic serial numbers"),
        count_cell(report.synthetic_ids, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate serial numbers"),
        count_cell(report.duplicate_ids, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Missing phone numbers"),
        count_cell(report.missing_phones, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Years set to default"),
        count_cell(report.defaulted_years, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Missing scores"),
        count_cell(report.missing_scores, Color::Yellow),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    println!("{table}");

    if !report.year_counts.is_empty() {
        let mut years = Table::new();
        years.set_header(vec![header_cell("Year"), header_cell("Students")]);
        apply_table_style(&mut years);
        for (label, count) in &report.year_counts {
            years.add_row(vec![Cell::new(label), Cell::new(count)]);
        }
        align_column(&mut years, 1, CellAlignment::Right);
        println!("{years}");
    }

    if !report.unmapped_governorates.is_empty() {
        let mut unmapped = Table::new();
        unmapped.set_header(vec![
            header_cell("Governorate kept as written"),
            header_cell("Rows"),
        ]);
        apply_table_style(&mut unmapped);
        for (value, count) in &report.unmapped_governorates {
            unmapped.add_row(vec![Cell::new(value), Cell::new(count).fg(Color::Yellow)]);
        }
        align_column(&mut unmapped, 1, CellAlignment::Right);
        println!("{unmapped}");
    }
}

pub fn print_record(record: &StudentRecord) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    for (label, value) in record.display_fields() {
        table.add_row(vec![header_cell(label), value_cell(value)]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn value_cell(value: String) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
