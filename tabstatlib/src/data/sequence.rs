//! Named DNA sequences and their per-sequence report values.

use serde::{Deserialize, Serialize};

/// A named DNA sequence.
///
/// Bases are stored as given; GC counting is case-insensitive, so upper
/// and lower case symbols report the same content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// Sequence identifier (e.g. a gene fragment name)
    pub id: String,
    /// Base symbols (A/C/G/T, any case)
    pub bases: String,
}

impl SequenceRecord {
    /// Create a named sequence.
    pub fn new(id: impl Into<String>, bases: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bases: bases.into(),
        }
    }

    /// Number of symbols in the sequence.
    pub fn len(&self) -> usize {
        self.bases.chars().count()
    }

    /// Whether the sequence has no symbols.
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Percentage of G or C symbols, always within `[0, 100]`.
    ///
    /// An empty sequence reports 0 rather than dividing by zero.
    pub fn gc_percent(&self) -> f64 {
        if self.bases.is_empty() {
            return 0.0;
        }
        let gc = self
            .bases
            .chars()
            .filter(|c| matches!(c, 'G' | 'C' | 'g' | 'c'))
            .count();
        gc as f64 * 100.0 / self.len() as f64
    }

    /// The first three symbols, or `None` for sequences shorter than one
    /// codon.
    pub fn start_codon(&self) -> Option<String> {
        if self.len() < 3 {
            None
        } else {
            Some(self.bases.chars().take(3).collect())
        }
    }

    /// The last three symbols, or `None` for sequences shorter than one
    /// codon.
    pub fn stop_codon(&self) -> Option<String> {
        let n = self.len();
        if n < 3 {
            None
        } else {
            Some(self.bases.chars().skip(n - 3).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        let seq = SequenceRecord::new("demo", "ATGAAATAG");
        assert_eq!(seq.len(), 9);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_gc_percent() {
        assert_eq!(SequenceRecord::new("demo", "ATGC").gc_percent(), 50.0);
        assert_eq!(SequenceRecord::new("demo", "GGCC").gc_percent(), 100.0);
        assert_eq!(SequenceRecord::new("demo", "ATAT").gc_percent(), 0.0);
    }

    #[test]
    fn test_gc_percent_is_case_insensitive() {
        let upper = SequenceRecord::new("demo", "ATGC");
        let lower = SequenceRecord::new("demo", "atgc");
        assert_eq!(upper.gc_percent(), lower.gc_percent());
    }

    #[test]
    fn test_gc_percent_empty_sequence() {
        let seq = SequenceRecord::new("demo", "");
        assert!(seq.is_empty());
        assert_eq!(seq.gc_percent(), 0.0);
    }

    #[test]
    fn test_gc_percent_within_bounds() {
        let seq = SequenceRecord::new("demo", "ATGACCATGATTACGGATTCACTGTAA");
        let gc = seq.gc_percent();
        assert!((0.0..=100.0).contains(&gc));
    }

    #[test]
    fn test_codons() {
        let seq = SequenceRecord::new("demo", "ATGAAATAG");
        assert_eq!(seq.start_codon().as_deref(), Some("ATG"));
        assert_eq!(seq.stop_codon().as_deref(), Some("TAG"));
    }

    #[test]
    fn test_codons_exactly_one_codon() {
        let seq = SequenceRecord::new("demo", "ATG");
        assert_eq!(seq.start_codon().as_deref(), Some("ATG"));
        assert_eq!(seq.stop_codon().as_deref(), Some("ATG"));
    }

    #[test]
    fn test_codons_too_short() {
        let seq = SequenceRecord::new("demo", "AT");
        assert_eq!(seq.start_codon(), None);
        assert_eq!(seq.stop_codon(), None);
    }
}
