//! # tabstatlib
//!
//! Grouped summary statistics and CSV report tables for small in-memory
//! datasets.
//!
//! ## Overview
//!
//! tabstatlib turns an ordered set of labeled records into flat report
//! tables in three stages:
//!
//! 1. **Data** ([`data`]): define records directly, or generate a
//!    synthetic cohort from an explicit random source, then append
//!    per-record derived fields.
//! 2. **Summary** ([`summary`]): partition records by group label in
//!    first-appearance order and compute each field's mean and sample
//!    standard deviation.
//! 3. **Output** ([`output`]): build presentation tables and serialize
//!    them to CSV with a configurable precision.
//!
//! Undefined results stay explicit through every stage: the standard
//! deviation of a single-record group is `None` in memory and the
//! literal `undefined` in serialized output, and a zero denominator in
//! a derived ratio carries its IEEE non-finite value into the report
//! instead of aborting the run.
//!
//! ## Example
//!
//! ```rust
//! use tabstatlib::{
//!     derive_fields, summarize_by_group, to_csv, CsvOptions, Record, RecordSet, Table,
//! };
//!
//! let set = RecordSet::new(
//!     vec!["measurement_1".into(), "measurement_2".into()],
//!     vec![
//!         Record::new("Sample_01", "Control", vec![100.0, 50.0]),
//!         Record::new("Sample_02", "Control", vec![110.0, 55.0]),
//!         Record::new("Sample_03", "Treatment", vec![90.0, 45.0]),
//!     ],
//! )
//! .unwrap();
//!
//! // Append the per-record mean and ratio columns.
//! let derived = derive_fields(&set).unwrap();
//! assert_eq!(derived.records[0].values, vec![100.0, 50.0, 75.0, 2.0]);
//!
//! // Fold records into one summary per group, in first-appearance order.
//! let summaries = summarize_by_group(&derived, &["measurement_1"]).unwrap();
//! assert_eq!(summaries.len(), 2);
//! assert_eq!(summaries[0].group, "Control");
//!
//! // Serialize with the default two decimal places.
//! let csv = to_csv(&Table::from_summaries(&summaries), &CsvOptions::new()).unwrap();
//! let text = String::from_utf8(csv).unwrap();
//! assert!(text.starts_with("group,measurement_1_mean,measurement_1_std"));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod summary;

pub use data::{
    derive_fields, generate_records, CohortSpec, FieldSpec, GroupSpec, Record, RecordSet,
    SequenceRecord, MEAN_FIELD, RATIO_FIELD,
};
pub use error::TabstatError;
pub use output::{to_csv, CellValue, CsvOptions, Table};
pub use summary::{summarize_by_group, FieldSummary, GroupSummary};

/// Result type for tabstatlib operations
pub type Result<T> = std::result::Result<T, TabstatError>;
