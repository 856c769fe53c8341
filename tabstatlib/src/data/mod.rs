//! Data definition: records, synthetic generation, and sequences.
//!
//! This module handles the first stage of the pipeline - defining the
//! records a report runs over. It provides:
//!
//! - **Records**: the core tabular types ([`Record`], [`RecordSet`]) and
//!   the per-record derivation step ([`derive_fields`])
//! - **Generation**: deterministic synthetic cohorts from an explicit
//!   random source ([`generate_records`])
//! - **Sequences**: named DNA sequences and their report values
//!   ([`SequenceRecord`])

pub mod generate;
pub mod record;
pub mod sequence;

pub use generate::{generate_records, CohortSpec, FieldSpec, GroupSpec};
pub use record::{derive_fields, Record, RecordSet, MEAN_FIELD, RATIO_FIELD};
pub use sequence::SequenceRecord;
