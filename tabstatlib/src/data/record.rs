//! Core record types and per-record field derivation.
//!
//! A [`RecordSet`] pairs an ordered list of measurement field names with
//! the records that carry one value per field. This is the input shape for
//! the whole pipeline: derivation appends columns to every record,
//! summarization folds records into per-group statistics.

use serde::{Deserialize, Serialize};

use crate::error::TabstatError;
use crate::Result;

/// Derived column name for the per-record measurement mean.
pub const MEAN_FIELD: &str = "mean_measurement";

/// Derived column name for the first-over-second measurement ratio.
pub const RATIO_FIELD: &str = "ratio";

/// One row of input data: an identifier, a group label, and the numeric
/// measurements in field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Row identifier (e.g. "Sample_01")
    pub id: String,
    /// Group label (e.g. "Control")
    pub group: String,
    /// Measurement values, one per field of the owning set
    pub values: Vec<f64>,
}

impl Record {
    /// Create a new record.
    pub fn new(id: impl Into<String>, group: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            values,
        }
    }

    /// Arithmetic mean of this record's own measurements.
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}

/// An ordered collection of records sharing one measurement schema.
///
/// Invariant: every record carries exactly one value per field. [`new`]
/// enforces this; code constructing sets directly must preserve it.
///
/// [`new`]: RecordSet::new
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Measurement field names, in column order
    pub fields: Vec<String>,
    /// Records, in input order
    pub records: Vec<Record>,
}

impl RecordSet {
    /// Create a set from field names and records.
    ///
    /// Fails if any record does not carry exactly one value per field.
    pub fn new(fields: Vec<String>, records: Vec<Record>) -> Result<Self> {
        for record in &records {
            if record.values.len() != fields.len() {
                return Err(TabstatError::MeasurementCount {
                    id: record.id.clone(),
                    expected: fields.len(),
                    actual: record.values.len(),
                });
            }
        }
        Ok(Self { fields, records })
    }

    /// Number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a measurement field by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }
}

/// Append the two derived columns to every record of a set.
///
/// Each output record gains, in order:
///
/// - [`MEAN_FIELD`]: the arithmetic mean of the record's own measurements
/// - [`RATIO_FIELD`]: the first measurement divided by the second
///
/// A zero denominator follows IEEE semantics (`inf`, `-inf`, or NaN for
/// zero over zero); the non-finite value flows into the report instead of
/// aborting the run. Record order and identifiers match the input exactly.
///
/// Sets with fewer than two measurement fields are an error.
pub fn derive_fields(set: &RecordSet) -> Result<RecordSet> {
    if set.fields.len() < 2 {
        return Err(TabstatError::NotEnoughFields(set.fields.len()));
    }

    let mut fields = set.fields.clone();
    fields.push(MEAN_FIELD.to_string());
    fields.push(RATIO_FIELD.to_string());

    let records = set
        .records
        .iter()
        .map(|record| {
            let mut values = record.values.clone();
            values.push(record.mean());
            values.push(record.values[0] / record.values[1]);
            Record::new(record.id.clone(), record.group.clone(), values)
        })
        .collect();

    Ok(RecordSet { fields, records })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> RecordSet {
        RecordSet::new(
            vec!["measurement_1".to_string(), "measurement_2".to_string()],
            vec![
                Record::new("Sample_01", "Control", vec![100.0, 50.0]),
                Record::new("Sample_02", "Treatment", vec![90.0, 45.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_record_mean() {
        let record = Record::new("Sample_01", "Control", vec![100.0, 50.0]);
        assert_eq!(record.mean(), 75.0);
    }

    #[test]
    fn test_record_set_rejects_mismatched_values() {
        let result = RecordSet::new(
            vec!["measurement_1".to_string(), "measurement_2".to_string()],
            vec![Record::new("Sample_01", "Control", vec![100.0])],
        );
        match result {
            Err(TabstatError::MeasurementCount {
                id,
                expected,
                actual,
            }) => {
                assert_eq!(id, "Sample_01");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected MeasurementCount error, got {other:?}"),
        }
    }

    #[test]
    fn test_field_index() {
        let set = sample_set();
        assert_eq!(set.field_index("measurement_2"), Some(1));
        assert_eq!(set.field_index("missing"), None);
    }

    #[test]
    fn test_derive_fields_appends_columns() {
        let derived = derive_fields(&sample_set()).unwrap();

        assert_eq!(
            derived.fields,
            vec![
                "measurement_1",
                "measurement_2",
                "mean_measurement",
                "ratio"
            ]
        );
        assert_eq!(derived.len(), 2);
        assert_eq!(derived.records[0].id, "Sample_01");
        assert_eq!(derived.records[0].values, vec![100.0, 50.0, 75.0, 2.0]);
        assert_eq!(derived.records[1].values, vec![90.0, 45.0, 67.5, 2.0]);
    }

    #[test]
    fn test_derive_fields_preserves_order() {
        let set = RecordSet::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                Record::new("r3", "g", vec![3.0, 1.0]),
                Record::new("r1", "g", vec![1.0, 1.0]),
                Record::new("r2", "g", vec![2.0, 1.0]),
            ],
        )
        .unwrap();

        let derived = derive_fields(&set).unwrap();
        let ids: Vec<&str> = derived.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r3", "r1", "r2"]);
    }

    #[test]
    fn test_derive_fields_zero_denominator() {
        let set = RecordSet::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                Record::new("r1", "g", vec![5.0, 0.0]),
                Record::new("r2", "g", vec![-5.0, 0.0]),
                Record::new("r3", "g", vec![0.0, 0.0]),
            ],
        )
        .unwrap();

        let derived = derive_fields(&set).unwrap();
        assert_eq!(derived.records[0].values[3], f64::INFINITY);
        assert_eq!(derived.records[1].values[3], f64::NEG_INFINITY);
        assert!(derived.records[2].values[3].is_nan());
    }

    #[test]
    fn test_derive_fields_requires_two_fields() {
        let set = RecordSet::new(
            vec!["only".to_string()],
            vec![Record::new("r1", "g", vec![1.0])],
        )
        .unwrap();

        match derive_fields(&set) {
            Err(TabstatError::NotEnoughFields(n)) => assert_eq!(n, 1),
            other => panic!("expected NotEnoughFields error, got {other:?}"),
        }
    }

    #[test]
    fn test_derive_fields_empty_set() {
        let set = RecordSet::new(
            vec!["a".to_string(), "b".to_string()],
            Vec::new(),
        )
        .unwrap();

        let derived = derive_fields(&set).unwrap();
        assert!(derived.is_empty());
        assert_eq!(derived.fields.len(), 4);
    }
}
