//! Table-ready data structures for report output.
//!
//! [`Table`] is the presentation-ready form of a report: named columns
//! plus rows of typed cells. It is the last structure before
//! serialization - CSV writing and console previews only iterate and
//! format, they never compute.
//!
//! The data flow is:
//!
//! 1. Raw records ([`RecordSet`], [`SequenceRecord`]) or group
//!    summaries ([`GroupSummary`])
//! 2. A [`Table`] built by the matching constructor
//! 3. CSV bytes or a console preview

use serde::{Deserialize, Serialize};

use crate::data::record::RecordSet;
use crate::data::sequence::SequenceRecord;
use crate::summary::group::GroupSummary;

/// A single typed table cell.
///
/// `Undefined` is the explicit marker for results that do not exist,
/// such as the standard deviation of a single-record group or the codon
/// of a two-symbol sequence. It renders as the literal text `undefined`,
/// never as an empty field or a stand-in number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// An integer value, rendered without decimal places
    Int(i64),
    /// A float value, rendered with the configured precision
    Float(f64),
    /// A text value
    Text(String),
    /// The marker for undefined results
    Undefined,
}

impl CellValue {
    /// Render the cell as text, using `precision` decimal places for
    /// float values.
    ///
    /// Non-finite floats keep their standard rendering (`inf`, `-inf`,
    /// `NaN`).
    pub fn format(&self, precision: usize) -> String {
        match self {
            CellValue::Int(v) => v.to_string(),
            CellValue::Float(v) => format!("{:.prec$}", v, prec = precision),
            CellValue::Text(s) => s.clone(),
            CellValue::Undefined => "undefined".to_string(),
        }
    }

    /// Whether the cell belongs in a right-aligned numeric column.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CellValue::Int(_) | CellValue::Float(_) | CellValue::Undefined
        )
    }
}

/// A float when present, the undefined marker otherwise.
impl From<Option<f64>> for CellValue {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(x) => CellValue::Float(x),
            None => CellValue::Undefined,
        }
    }
}

/// Table-ready report data: column names plus rows of typed cells.
///
/// Every row carries exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column headers, in order
    pub columns: Vec<String>,
    /// Data rows
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Detail table: one row per record, with `sample_id` and `group`
    /// columns followed by one column per measurement field.
    pub fn from_records(set: &RecordSet) -> Self {
        let mut columns = vec!["sample_id".to_string(), "group".to_string()];
        columns.extend(set.fields.iter().cloned());

        let rows = set
            .records
            .iter()
            .map(|record| {
                let mut row = vec![
                    CellValue::Text(record.id.clone()),
                    CellValue::Text(record.group.clone()),
                ];
                row.extend(record.values.iter().map(|v| CellValue::Float(*v)));
                row
            })
            .collect();

        Table { columns, rows }
    }

    /// Summary table: one row per group, with a `group` column followed
    /// by `<field>_mean` and `<field>_std` columns per summarized field.
    pub fn from_summaries(summaries: &[GroupSummary]) -> Self {
        let mut columns = vec!["group".to_string()];
        if let Some(first) = summaries.first() {
            for field in &first.fields {
                columns.push(format!("{}_mean", field.field));
                columns.push(format!("{}_std", field.field));
            }
        }

        let rows = summaries
            .iter()
            .map(|summary| {
                let mut row = vec![CellValue::Text(summary.group.clone())];
                for field in &summary.fields {
                    row.push(CellValue::Float(field.mean));
                    row.push(CellValue::from(field.std_dev));
                }
                row
            })
            .collect();

        Table { columns, rows }
    }

    /// Sequence table: one row per sequence with its identifier, bases,
    /// length, GC percentage, and start/stop codons.
    pub fn from_sequences(sequences: &[SequenceRecord]) -> Self {
        let columns = [
            "sequence_id",
            "sequence",
            "length",
            "gc_percent",
            "start_codon",
            "stop_codon",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let rows = sequences
            .iter()
            .map(|sequence| {
                vec![
                    CellValue::Text(sequence.id.clone()),
                    CellValue::Text(sequence.bases.clone()),
                    CellValue::Int(sequence.len() as i64),
                    CellValue::Float(sequence.gc_percent()),
                    codon_cell(sequence.start_codon()),
                    codon_cell(sequence.stop_codon()),
                ]
            })
            .collect();

        Table { columns, rows }
    }

    /// A copy of the table truncated to its first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn codon_cell(codon: Option<String>) -> CellValue {
    match codon {
        Some(c) => CellValue::Text(c),
        None => CellValue::Undefined,
    }
}
