use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use samplesheet_core::CheckSummary;

pub fn print_summary(summary: &CheckSummary) {
    println!("Samplesheet: {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    println!("{}", summary_table(summary));
}

fn summary_table(summary: &CheckSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Sample"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for sample in &summary.samples {
        table.add_row(vec![
            Cell::new(&sample.sample_id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            row_count_cell(sample.rows),
        ]);
    }
    table.add_row(vec![
        Cell::new(format!("TOTAL ({} samples)", summary.sample_count()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.row_count()).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Samples spread over several rows (lanes) are highlighted.
fn row_count_cell(rows: usize) -> Cell {
    if rows > 1 {
        Cell::new(rows).fg(Color::Yellow)
    } else {
        Cell::new(rows)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
