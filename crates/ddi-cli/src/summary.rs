use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ddi_model::Language;

use crate::types::{ConvertResult, LanguageSummary};

pub fn print_summary(result: &ConvertResult) {
    println!("Study: {}", result.study);
    println!("Version: {}", result.version);
    if result.dry_run {
        println!("Output: none (dry run)");
    } else {
        println!(
            "Output: {} ({} {} files)",
            result.output_dir.display(),
            result.outputs.len(),
            result.format
        );
    }
    println!(
        "Files: {} primary, {} translations ({} labels merged)",
        result.report.primary_files,
        result.report.secondary_files,
        result.report.translations_merged
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Variables"),
        header_cell("Categorical"),
        header_cell("Languages"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_variables = 0usize;
    let mut total_categorical = 0usize;
    for dataset in &result.datasets {
        total_variables += dataset.variables;
        total_categorical += dataset.categorical;
        let languages = if dataset.languages.is_empty() {
            dim_cell("-")
        } else {
            let codes: Vec<&str> = dataset.languages.iter().map(Language::as_str).collect();
            Cell::new(codes.join(", "))
        };
        table.add_row(vec![
            Cell::new(&dataset.name),
            Cell::new(dataset.variables),
            count_cell(dataset.categorical),
            languages,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_variables).add_attribute(Attribute::Bold),
        Cell::new(total_categorical).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_issue_table(result);
}

fn print_issue_table(result: &ConvertResult) {
    if !result.report.has_issues() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Variable"),
        header_cell("Message"),
    ]);
    apply_summary_table_style(&mut table);
    for issue in &result.report.issues {
        table.add_row(vec![
            Cell::new(issue.path.display()),
            issue
                .variable
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(&issue.message).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Translation issues:");
    println!("{table}");
}

pub fn print_languages(languages: &[LanguageSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Directory"),
        header_cell("Language"),
        header_cell("Files"),
        header_cell("Primary"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for summary in languages {
        let language = match &summary.language {
            Some(language) => Cell::new(language),
            None => Cell::new("ignored").fg(Color::Yellow),
        };
        let primary = if summary.primary {
            Cell::new("✓")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(&summary.directory),
            language,
            Cell::new(summary.files),
            primary,
        ]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
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
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
