use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ldc_cli::types::{InputPreview, RunResult};
use ldc_model::Value;

pub fn print_preview(preview: &InputPreview) {
    println!(
        "Input: {} rows, {} columns",
        preview.total_rows,
        preview.columns.len()
    );
    if !preview.rows.is_empty() {
        let mut table = Table::new();
        table.set_header(preview.columns.iter().map(String::as_str).map(header_cell));
        apply_table_style(&mut table);
        for record in &preview.rows {
            table.add_row(record.iter().map(value_cell));
        }
        println!("{table}");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Non-null"),
        header_cell("Null"),
        header_cell("Distinct"),
        header_cell("Kind"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for profile in &preview.profiles {
        let kind = if profile.is_numeric {
            "numeric"
        } else {
            "text"
        };
        table.add_row(vec![
            Cell::new(&profile.name),
            Cell::new(profile.non_null),
            count_cell(profile.nulls, Color::Yellow),
            Cell::new(profile.distinct),
            dim_cell(kind),
        ]);
    }
    println!("{table}");
}

pub fn print_summary(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Removed"),
        header_cell("Nulled"),
        header_cell("Filled"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_nulled = 0usize;
    let mut total_filled = 0usize;
    for stage in &result.pipeline.stages {
        total_nulled += stage.values_nulled;
        total_filled += stage.values_filled;
        table.add_row(vec![
            Cell::new(stage.stage),
            Cell::new(stage.rows_in),
            Cell::new(stage.rows_out),
            count_cell(stage.rows_removed(), Color::Red),
            count_cell(stage.values_nulled, Color::Yellow),
            count_cell(stage.values_filled, Color::Yellow),
        ]);
    }
    let rows_in = result.pipeline.rows_in;
    let rows_out = result.pipeline.rows_out;
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(rows_in).add_attribute(Attribute::Bold),
        Cell::new(rows_out).add_attribute(Attribute::Bold),
        count_cell(rows_in.saturating_sub(rows_out), Color::Red).add_attribute(Attribute::Bold),
        count_cell(total_nulled, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_filled, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if result.dry_run {
        println!("Output: {} (dry run, not written)", result.output.display());
    } else {
        println!(
            "Output: {} ({} rows)",
            result.output.display(),
            result.rows_written()
        );
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: &Value) -> Cell {
    match value {
        Value::Null => dim_cell("-"),
        other => Cell::new(other),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
