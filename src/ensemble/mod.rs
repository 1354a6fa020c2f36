//! Ensemble merging
//!
//! Combines the annotated pairs from both strategies into one
//! deduplicated record list. Keys are (aspect, description) after
//! space-to-underscore normalization; a duplicate key adds its polarity
//! to the existing record, while subjectivity stays from the first
//! occurrence. First-seen order is preserved and no record is removed.

use crate::types::{AnnotatedPair, MergedRecord};

/// Replace internal spaces with underscores. Idempotent on strings that
/// contain no spaces.
pub fn normalize(text: &str) -> String {
    text.replace(' ', "_")
}

/// Accumulator for the ensemble merge. Owns its output sequence.
#[derive(Debug, Clone, Default)]
pub struct EnsembleMerger {
    records: Vec<MergedRecord>,
}

impl EnsembleMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one annotated pair into the accumulator.
    pub fn push(&mut self, pair: AnnotatedPair) {
        let aspect = normalize(&pair.aspect);
        let description = normalize(&pair.description);

        if let Some(existing) = self
            .records
            .iter_mut()
            .find(|record| record.aspect == aspect && record.description == description)
        {
            existing.polarity += pair.polarity;
            return;
        }

        self.records.push(MergedRecord {
            aspect,
            description,
            polarity: pair.polarity,
            subjectivity: pair.subjectivity,
        });
    }

    /// Consume the accumulator, yielding records in first-seen order.
    pub fn finish(self) -> Vec<MergedRecord> {
        self.records
    }

    /// Merge a full pair sequence in one call.
    pub fn merge(pairs: impl IntoIterator<Item = AnnotatedPair>) -> Vec<MergedRecord> {
        let mut merger = Self::new();
        for pair in pairs {
            merger.push(pair);
        }
        merger.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(aspect: &str, description: &str, polarity: f64, subjectivity: f64) -> AnnotatedPair {
        AnnotatedPair {
            aspect: aspect.into(),
            description: description.into(),
            polarity,
            subjectivity,
        }
    }

    #[test]
    fn test_normalize_replaces_spaces() {
        assert_eq!(normalize("battery life"), "battery_life");
        assert_eq!(normalize("not bright"), "not_bright");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        assert_eq!(normalize("battery_life"), "battery_life");
        assert_eq!(normalize(&normalize("battery life")), "battery_life");
    }

    #[test]
    fn test_duplicate_key_sums_polarity() {
        let merged = EnsembleMerger::merge(vec![
            pair("screen", "not bright", -0.6, 0.7),
            pair("screen", "not bright", -0.5, 0.3),
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].aspect, "screen");
        assert_eq!(merged[0].description, "not_bright");
        assert!((merged[0].polarity - (-1.1)).abs() < 1e-12);
        // Subjectivity from the first occurrence only.
        assert_eq!(merged[0].subjectivity, 0.7);
    }

    #[test]
    fn test_keys_are_unique_after_merge() {
        let merged = EnsembleMerger::merge(vec![
            pair("screen", "bright", 0.5, 0.5),
            pair("case", "cheap", -0.2, 0.4),
            pair("screen", "bright", 0.1, 0.9),
            pair("screen", "cracked", -0.9, 0.2),
        ]);

        let mut keys: Vec<(&str, &str)> = merged
            .iter()
            .map(|r| (r.aspect.as_str(), r.description.as_str()))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), merged.len());
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let merged = EnsembleMerger::merge(vec![
            pair("screen", "bright", 0.5, 0.5),
            pair("case", "cheap", -0.2, 0.4),
            pair("screen", "bright", 0.1, 0.9),
        ]);

        let aspects: Vec<&str> = merged.iter().map(|r| r.aspect.as_str()).collect();
        assert_eq!(aspects, vec!["screen", "case"]);
    }

    #[test]
    fn test_normalization_collapses_equivalent_keys() {
        // "battery life" from one strategy and "battery_life" from the
        // other are the same key after normalization.
        let merged = EnsembleMerger::merge(vec![
            pair("battery life", "good", 0.4, 0.6),
            pair("battery_life", "good", 0.3, 0.1),
        ]);

        assert_eq!(merged.len(), 1);
        assert!((merged[0].polarity - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(EnsembleMerger::merge(Vec::new()).is_empty());
    }
}
