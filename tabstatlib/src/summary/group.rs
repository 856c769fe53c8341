//! Grouped aggregation: per-group mean and sample standard deviation.
//!
//! Grouping is an explicit partition of records by their group label, in
//! first-appearance order. Nothing here skips or coerces values: a NaN
//! measurement propagates into the group statistics, and the standard
//! deviation of a group with fewer than two records is `None` rather
//! than a stand-in number.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::record::{Record, RecordSet};
use crate::error::TabstatError;
use crate::Result;

/// Mean and sample standard deviation of one measurement field within
/// one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    /// Measurement field name
    pub field: String,
    /// Arithmetic mean across the group's records
    pub mean: f64,
    /// Sample standard deviation (N-1 divisor); `None` for groups with
    /// fewer than two records
    pub std_dev: Option<f64>,
}

/// Aggregate statistics for all records sharing one group label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Group label
    pub group: String,
    /// Number of contributing records
    pub count: usize,
    /// Per-field statistics, in requested field order
    pub fields: Vec<FieldSummary>,
}

/// Partition `set` by group label and summarize the named fields.
///
/// Returns one [`GroupSummary`] per distinct label, in order of first
/// appearance in the set. Each requested field yields its arithmetic
/// mean and its sample standard deviation (N-1 divisor); the standard
/// deviation of a single-record group is `None`. Requesting a field the
/// set does not carry is an error.
pub fn summarize_by_group(set: &RecordSet, fields: &[&str]) -> Result<Vec<GroupSummary>> {
    let mut indices = Vec::with_capacity(fields.len());
    for name in fields {
        let idx = set
            .field_index(name)
            .ok_or_else(|| TabstatError::UnknownField((*name).to_string()))?;
        indices.push((*name, idx));
    }

    // One pass, keeping labels in first-appearance order.
    let mut members: Vec<(String, Vec<&Record>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for record in &set.records {
        match positions.get(record.group.as_str()) {
            Some(&i) => members[i].1.push(record),
            None => {
                positions.insert(record.group.as_str(), members.len());
                members.push((record.group.clone(), vec![record]));
            }
        }
    }

    let summaries = members
        .into_iter()
        .map(|(group, records)| {
            let field_stats = indices
                .iter()
                .map(|(name, idx)| {
                    let values: Vec<f64> = records.iter().map(|r| r.values[*idx]).collect();
                    FieldSummary {
                        field: (*name).to_string(),
                        mean: mean(&values),
                        std_dev: sample_std_dev(&values),
                    }
                })
                .collect();
            GroupSummary {
                group,
                count: records.len(),
                fields: field_stats,
            }
        })
        .collect();

    Ok(summaries)
}

/// Arithmetic mean of a non-empty slice.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with the N-1 divisor, or `None` when fewer
/// than two values leave it undefined.
fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate::{generate_records, CohortSpec, FieldSpec, GroupSpec};
    use crate::data::record::derive_fields;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_set() -> RecordSet {
        RecordSet::new(
            vec!["measurement_1".to_string(), "measurement_2".to_string()],
            vec![
                Record::new("Sample_01", "Control", vec![10.0, 1.0]),
                Record::new("Sample_02", "Treatment", vec![30.0, 3.0]),
                Record::new("Sample_03", "Control", vec![20.0, 2.0]),
                Record::new("Sample_04", "Treatment", vec![50.0, 5.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_groups_keep_first_appearance_order() {
        let set = RecordSet::new(
            vec!["m".to_string()],
            vec![
                Record::new("r1", "B", vec![1.0]),
                Record::new("r2", "A", vec![2.0]),
                Record::new("r3", "B", vec![3.0]),
                Record::new("r4", "C", vec![4.0]),
            ],
        )
        .unwrap();

        let summaries = summarize_by_group(&set, &["m"]).unwrap();
        let labels: Vec<&str> = summaries.iter().map(|s| s.group.as_str()).collect();
        assert_eq!(labels, vec!["B", "A", "C"]);
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[1].count, 1);
    }

    #[test]
    fn test_mean_and_std_dev() {
        let summaries = summarize_by_group(&sample_set(), &["measurement_1"]).unwrap();

        assert_eq!(summaries.len(), 2);
        let control = &summaries[0];
        assert_eq!(control.group, "Control");
        assert_eq!(control.count, 2);
        assert_eq!(control.fields[0].field, "measurement_1");
        assert_eq!(control.fields[0].mean, 15.0);

        // Sample std dev of [10, 20]: sqrt(50) ~ 7.0711
        let std = control.fields[0].std_dev.unwrap();
        assert!((std - 50.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_known_sample_std_dev() {
        let set = RecordSet::new(
            vec!["m".to_string()],
            vec![
                Record::new("r1", "g", vec![2.0]),
                Record::new("r2", "g", vec![4.0]),
                Record::new("r3", "g", vec![4.0]),
                Record::new("r4", "g", vec![4.0]),
                Record::new("r5", "g", vec![5.0]),
                Record::new("r6", "g", vec![5.0]),
                Record::new("r7", "g", vec![7.0]),
                Record::new("r8", "g", vec![9.0]),
            ],
        )
        .unwrap();

        let summaries = summarize_by_group(&set, &["m"]).unwrap();
        let std = summaries[0].fields[0].std_dev.unwrap();
        assert!((std - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_identical_values_have_zero_std_dev() {
        let set = RecordSet::new(
            vec!["m".to_string()],
            vec![
                Record::new("r1", "g", vec![5.0]),
                Record::new("r2", "g", vec![5.0]),
                Record::new("r3", "g", vec![5.0]),
            ],
        )
        .unwrap();

        let summaries = summarize_by_group(&set, &["m"]).unwrap();
        assert_eq!(summaries[0].fields[0].std_dev, Some(0.0));
    }

    #[test]
    fn test_single_record_group_has_undefined_std_dev() {
        let set = RecordSet::new(
            vec!["m".to_string()],
            vec![
                Record::new("r1", "Control", vec![10.0]),
                Record::new("r2", "Treatment", vec![20.0]),
                Record::new("r3", "Control", vec![30.0]),
            ],
        )
        .unwrap();

        let summaries = summarize_by_group(&set, &["m"]).unwrap();
        assert!(summaries[0].fields[0].std_dev.is_some());
        assert_eq!(summaries[1].fields[0].std_dev, None);
        assert_eq!(summaries[1].fields[0].mean, 20.0);
    }

    #[test]
    fn test_nan_measurement_propagates() {
        let set = RecordSet::new(
            vec!["m".to_string()],
            vec![
                Record::new("r1", "g", vec![1.0]),
                Record::new("r2", "g", vec![f64::NAN]),
            ],
        )
        .unwrap();

        let summaries = summarize_by_group(&set, &["m"]).unwrap();
        assert!(summaries[0].fields[0].mean.is_nan());
        assert!(summaries[0].fields[0].std_dev.unwrap().is_nan());
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        match summarize_by_group(&sample_set(), &["missing"]) {
            Err(TabstatError::UnknownField(name)) => assert_eq!(name, "missing"),
            other => panic!("expected UnknownField error, got {other:?}"),
        }
    }

    #[test]
    fn test_fields_follow_requested_order() {
        let summaries =
            summarize_by_group(&sample_set(), &["measurement_2", "measurement_1"]).unwrap();

        let names: Vec<&str> = summaries[0]
            .fields
            .iter()
            .map(|f| f.field.as_str())
            .collect();
        assert_eq!(names, vec!["measurement_2", "measurement_1"]);
    }

    #[test]
    fn test_empty_set_yields_no_summaries() {
        let set = RecordSet::new(vec!["m".to_string()], Vec::new()).unwrap();
        let summaries = summarize_by_group(&set, &["m"]).unwrap();
        assert!(summaries.is_empty());
    }

    #[test]
    fn test_full_pipeline_on_generated_cohort() {
        let spec = CohortSpec {
            id_prefix: "Sample".to_string(),
            groups: vec![
                GroupSpec::new("Control", 10),
                GroupSpec::new("Treatment", 10),
            ],
            fields: vec![
                FieldSpec::new("measurement_1", 100.0, 15.0),
                FieldSpec::new("measurement_2", 50.0, 10.0),
            ],
        };

        let mut rng = StdRng::seed_from_u64(42);
        let records = generate_records(&spec, &mut rng).unwrap();
        let derived = derive_fields(&records).unwrap();
        let summaries = summarize_by_group(
            &derived,
            &["measurement_1", "measurement_2", "mean_measurement"],
        )
        .unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].group, "Control");
        assert_eq!(summaries[1].group, "Treatment");
        for summary in &summaries {
            assert_eq!(summary.count, 10);
            assert_eq!(summary.fields.len(), 3);
            for field in &summary.fields {
                assert!(field.mean.is_finite());
                assert!(field.std_dev.unwrap().is_finite());
            }
        }
    }
}
