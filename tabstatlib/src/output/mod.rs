//! Output formatting: report tables and CSV serialization.
//!
//! This module handles the third and final stage of the pipeline -
//! presenting records and summaries. [`Table`] is pure presentation
//! data (columns plus typed cells); [`to_csv`] renders it with the
//! configured precision.

pub mod csv;
pub mod table;

pub use csv::{to_csv, CsvOptions};
pub use table::{CellValue, Table};
