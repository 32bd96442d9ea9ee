//! Per-partition group statistics.
//!
//! For one partition, computes each group's arithmetic mean of every
//! variable over exactly the subjects carrying that label, plus the ordered
//! list of those subjects' ids.
//!
//! NaN semantics: standard f64 summation — a NaN input value makes the
//! affected mean NaN, and an empty group (only possible at `n = 1`) has NaN
//! means throughout. Both propagate downstream undisturbed.

use super::types::{Group, GroupSummary, Partition, PartitionSummary};
use crate::table::SubjectTable;

/// Computes [`PartitionSummary`] rows against a fixed subject table.
pub struct PartitionScorer<'a> {
    table: &'a SubjectTable,
}

impl<'a> PartitionScorer<'a> {
    /// Creates a scorer over `table`.
    ///
    /// The partition passed to [`summarize`](Self::summarize) must have one
    /// label per table row.
    pub fn new(table: &'a SubjectTable) -> Self {
        Self { table }
    }

    /// Summarizes one partition: per-group means and id lists.
    pub fn summarize(&self, partition: &Partition) -> PartitionSummary {
        debug_assert_eq!(partition.labels.len(), self.table.len());

        PartitionSummary {
            combo: partition.combo,
            a: self.group_summary(partition, Group::A),
            b: self.group_summary(partition, Group::B),
        }
    }

    fn group_summary(&self, partition: &Partition, group: Group) -> GroupSummary {
        let vars = self.table.variables().len();
        let mut sums = vec![0.0f64; vars];
        let mut ids = Vec::new();

        for (subject, &label) in self.table.subjects().iter().zip(&partition.labels) {
            if label != group {
                continue;
            }
            ids.push(subject.id);
            for (sum, &value) in sums.iter_mut().zip(&subject.values) {
                *sum += value;
            }
        }

        // 0/0 for an empty group: the mean is undefined and stays NaN.
        let count = ids.len() as f64;
        let means = sums.into_iter().map(|s| s / count).collect();

        GroupSummary {
            combo: partition.combo,
            group,
            means,
            ids,
        }
    }
}
