//! CSV serialization for report tables.
//!
//! Cells are rendered to text with a configurable number of decimal
//! places before writing; quoting follows the writer's standard policy,
//! so fields containing commas, quotes, or newlines come out quoted and
//! everything else is written bare.

use crate::output::table::Table;
use crate::Result;

/// Options for CSV serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Decimal places for float cells
    pub precision: usize,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl CsvOptions {
    /// Create options with the default precision of two decimal places.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of decimal places for float cells.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// Serialize a table to CSV bytes: one header row, then one line per
/// data row, in table order.
pub fn to_csv(table: &Table, options: &CsvOptions) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(&table.columns)?;
        for row in &table.rows {
            let cells: Vec<String> = row.iter().map(|c| c.format(options.precision)).collect();
            writer.write_record(&cells)?;
        }
        writer.flush()?;
    }
    Ok(buf)
}
