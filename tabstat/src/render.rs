//! Fixed-width console rendering for report tables

use console::Style;
use tabstatlib::Table;

/// Minimum printed width of any column
const MIN_CELL_WIDTH: usize = 6;

/// Gap between adjacent columns
const COLUMN_GAP: &str = "  ";

/// Style a section heading (bold)
pub fn section(text: &str) -> String {
    Style::new().bold().apply_to(text).to_string()
}

/// Render a table as fixed-width text: a header row, a dashed separator,
/// and one line per data row. Numeric columns are right-aligned, text
/// columns left-aligned; float cells use `precision` decimal places.
pub fn render_table(table: &Table, precision: usize) -> String {
    let formatted: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.format(precision)).collect())
        .collect();

    // Column width: widest of header and cells, with a floor
    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(col, name)| {
            formatted
                .iter()
                .map(|row| row[col].len())
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap_or(0)
                .max(MIN_CELL_WIDTH)
        })
        .collect();

    // A column is numeric when any of its cells is
    let numeric: Vec<bool> = (0..table.columns.len())
        .map(|col| table.rows.iter().any(|row| row[col].is_numeric()))
        .collect();

    let mut out = String::new();

    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .zip(&numeric)
        .map(|((name, width), numeric)| pad(name, *width, *numeric))
        .collect();
    out.push_str(header.join(COLUMN_GAP).trim_end());
    out.push('\n');

    let total_width =
        widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    for row in &formatted {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .zip(&numeric)
            .map(|((cell, width), numeric)| pad(cell, *width, *numeric))
            .collect();
        out.push_str(line.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }

    out
}

/// Pad a value to `width`: right-aligned when numeric, left otherwise
fn pad(value: &str, width: usize, numeric: bool) -> String {
    if numeric {
        format!("{:>width$}", value, width = width)
    } else {
        format!("{:<width$}", value, width = width)
    }
}
