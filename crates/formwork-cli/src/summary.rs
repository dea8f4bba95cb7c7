use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use formwork_core::{FORM_LEVEL_KEY, ValidationReport};
use serde_json::json;

const TABLE_WIDTH: u16 = 120;

/// Print the validation outcome of one form.
pub fn print_report(form: &Path, report: &ValidationReport, unknown_names: &[String]) {
    println!("Form: {}", form.display());
    if !unknown_names.is_empty() {
        println!("Ignored names: {}", unknown_names.join(", "));
    }
    if report.is_valid() {
        println!("Valid: no errors");
        return;
    }

    let mut table = new_table(&["Field", "#", "Message"], true);
    align_column(&mut table, 1, CellAlignment::Right);
    for (key, messages) in report.iter() {
        for (index, message) in messages.iter().enumerate() {
            let field = if index == 0 {
                field_cell(key)
            } else {
                dim_cell("")
            };
            table.add_row(vec![field, Cell::new(index + 1), Cell::new(message)]);
        }
    }
    table.add_row(vec![
        header_cell("Total"),
        count_cell(report.error_count()),
        Cell::new(""),
    ]);
    println!("{table}");
}

/// Print the validation outcome as one JSON document.
pub fn print_report_json(report: &ValidationReport, unknown_names: &[String]) -> serde_json::Result<()> {
    let document = json!({
        "valid": report.is_valid(),
        "error_count": report.error_count(),
        "errors": report,
        "ignored_names": unknown_names,
    });
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

/// A table with styled headers. Reports get inner borders, listings are
/// condensed.
pub fn new_table(headers: &[&str], bordered: bool) -> Table {
    let mut table = Table::new();
    if bordered {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_SOLID_INNER_BORDERS);
    } else {
        table.load_preset(UTF8_FULL_CONDENSED);
    }
    table
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH)
        .set_header(headers.iter().copied().map(header_cell));
    table
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

pub fn dim_cell(value: &str) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn field_cell(key: &str) -> Cell {
    if key == FORM_LEVEL_KEY {
        Cell::new("(form)").fg(Color::Yellow)
    } else {
        Cell::new(key)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count)
    }
}
