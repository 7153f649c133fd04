use budgetbrief_core::batch::BatchReport;
use budgetbrief_core::model::NormalizedTable;
use std::path::Path;

/// Render a normalized table as aligned text.
pub fn format_table(table: &NormalizedTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Year {} -- {} schema, {} row(s)\n\n",
        table.year,
        table.schema,
        table.rows.len()
    ));

    let columns = table.schema.columns();
    let cat_width = table
        .rows
        .iter()
        .map(|r| r.category.chars().count())
        .chain(std::iter::once(columns[0].len()))
        .max()
        .unwrap_or(10);

    let value_widths: Vec<usize> = table
        .schema
        .value_columns()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            table
                .rows
                .iter()
                .filter_map(|r| r.values.get(i).copied().flatten())
                .map(|v| v.to_string().len())
                .chain(std::iter::once(label.len()))
                .max()
                .unwrap_or(label.len())
        })
        .collect();

    out.push_str(&format!("  {:<width$}", columns[0], width = cat_width));
    for (label, w) in table.schema.value_columns().iter().zip(&value_widths) {
        out.push_str(&format!("  {:>width$}", label, width = *w));
    }
    out.push('\n');

    for row in &table.rows {
        out.push_str(&format!("  {:<width$}", row.category, width = cat_width));
        for (value, w) in row.values.iter().zip(&value_widths) {
            let cell = value.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
            out.push_str(&format!("  {:>width$}", cell, width = *w));
        }
        out.push('\n');
    }

    out
}

/// One-line outcome plus the reason for every skipped report.
pub fn print_batch_summary(report: &BatchReport, output_file: &Path) {
    eprintln!(
        "Extracted {} row(s) from {} report(s), written to {}",
        report.dataset.len(),
        report.processed.len(),
        output_file.display()
    );

    if !report.skipped.is_empty() {
        eprintln!("  {} report(s) skipped:", report.skipped.len());
        for s in &report.skipped {
            eprintln!("    {}: {}", s.path.display(), s.reason);
        }
    }
}
