use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input:  {}", result.input.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Columns written"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for report in &result.steps {
        let status = if report.skipped {
            Cell::new("skipped").fg(Color::DarkGrey)
        } else {
            Cell::new("ok").fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(&report.step),
            Cell::new(report.columns.join(", ")),
            status,
        ]);
    }
    println!("{table}");

    println!(
        "{} rows, {} -> {} columns",
        result.records, result.columns_before, result.columns_after
    );
    if result.rows_missing_economic > 0 {
        println!(
            "{} rows had no economic record for their region",
            result.rows_missing_economic
        );
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Left)
}
