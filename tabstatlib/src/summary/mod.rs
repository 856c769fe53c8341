//! Aggregation: fold records into per-group statistics.
//!
//! This module handles the second stage of the pipeline - between the
//! data layer and table output. [`summarize_by_group`] partitions a
//! record set by group label and reduces each group to per-field means
//! and sample standard deviations.

pub mod group;

pub use group::{summarize_by_group, FieldSummary, GroupSummary};
