//! Rows grouped by sample identifier.

use std::collections::BTreeMap;

use crate::row::SampleRow;

/// Validated rows keyed by `sample_id`.
///
/// Keys iterate in lexicographic order; rows under a key keep insertion
/// order. Rows sharing an id but differing in any field are kept side by
/// side (e.g. several sequencing lanes of one sample).
#[derive(Debug, Clone, Default)]
pub struct SampleMapping {
    samples: BTreeMap<String, Vec<SampleRow>>,
}

impl SampleMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row under its sample id.
    ///
    /// Returns `false` and leaves the mapping unchanged when a row with the
    /// same fields is already present.
    pub fn insert(&mut self, row: SampleRow) -> bool {
        let rows = self.samples.entry(row.sample_id.clone()).or_default();
        if rows.iter().any(|existing| existing.same_record(&row)) {
            return false;
        }
        rows.push(row);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of distinct sample ids.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Total number of rows across all samples.
    pub fn row_count(&self) -> usize {
        self.samples.values().map(Vec::len).sum()
    }

    /// Rows for one sample, in insertion order.
    pub fn get(&self, sample_id: &str) -> Option<&[SampleRow]> {
        self.samples.get(sample_id).map(Vec::as_slice)
    }

    /// Samples in sorted id order.
    pub fn samples(&self) -> impl Iterator<Item = (&str, &[SampleRow])> {
        self.samples
            .iter()
            .map(|(id, rows)| (id.as_str(), rows.as_slice()))
    }

    /// All rows in canonical output order.
    pub fn rows(&self) -> impl Iterator<Item = &SampleRow> {
        self.samples.values().flatten()
    }
}
