//! Core types flowing through the assignment pipeline.
//!
//! Everything here is a derived, immutable artifact of one run. Only
//! [`OptimalAssignment`] is meant to outlive the computation — it is the
//! artifact handed to export and plot collaborators.

use std::fmt;

use crate::table::{Subject, SubjectId};

/// Sequence number of a partition in generation order, starting at 1.
///
/// Stable within one run; carries no meaning beyond uniqueness and ordering.
pub type ComboId = u64;

/// One of the two group labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Group {
    /// Group "a".
    A,
    /// Group "b".
    B,
}

impl Group {
    /// The label as it appears in output tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Group::A => "a",
            Group::B => "b",
        }
    }

    /// The other label.
    pub fn other(self) -> Group {
        match self {
            Group::A => Group::B,
            Group::B => Group::A,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full assignment of every subject to one of the two labels.
///
/// `labels[i]` is the group of the subject at row position `i`. Invariant:
/// the two label counts differ by at most one (balance constraint).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    /// Sequence number in generation order.
    pub combo: ComboId,

    /// Group label per subject position.
    pub labels: Vec<Group>,
}

impl Partition {
    /// Number of positions carrying `group`.
    pub fn count(&self, group: Group) -> usize {
        self.labels.iter().filter(|&&g| g == group).count()
    }

    /// Whether the two label counts differ by at most one.
    pub fn is_balanced(&self) -> bool {
        let a = self.count(Group::A);
        let b = self.labels.len() - a;
        a.abs_diff(b) <= 1
    }
}

/// Per-group statistics of one partition: one AllMeans row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSummary {
    /// Owning partition.
    pub combo: ComboId,

    /// Group label.
    pub group: Group,

    /// Arithmetic mean per variable, in table variable order.
    ///
    /// NaN when the group is empty or an input value is NaN.
    pub means: Vec<f64>,

    /// Subject ids carrying this label, in table row order.
    pub ids: Vec<SubjectId>,
}

/// Both group summaries of one partition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionSummary {
    /// Owning partition.
    pub combo: ComboId,

    /// Summary of group "a".
    pub a: GroupSummary,

    /// Summary of group "b".
    pub b: GroupSummary,
}

/// Per-variable absolute mean difference of one partition: one
/// MeanAbsoluteDifferences row.
///
/// The identifier lists are held structurally — they are the authoritative
/// record of which subject went where, and downstream stages consume them
/// directly rather than re-parsing any display string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffRow {
    /// Owning partition.
    pub combo: ComboId,

    /// `|mean_a − mean_b|` per variable, in table variable order.
    ///
    /// Position-based: index `j` corresponds to the table's `j`-th variable.
    pub diffs: Vec<f64>,

    /// Sum of `diffs` — the partition's total dissimilarity.
    pub total: f64,

    /// Subject ids of group "a", in table row order.
    pub ids_a: Vec<SubjectId>,

    /// Subject ids of group "b", in table row order.
    pub ids_b: Vec<SubjectId>,
}

impl DiffRow {
    /// Human-readable rendering of both identifier lists, e.g.
    /// `a: [1, 3], b: [2, 4]`.
    ///
    /// For export traceability only; never parsed back.
    pub fn group_label(&self) -> String {
        format!("a: {:?}, b: {:?}", self.ids_a, self.ids_b)
    }
}

/// One AllCombinations row: one subject's placement within one partition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboRow {
    /// Owning partition.
    pub combo: ComboId,

    /// Group assigned to the subject in this partition.
    pub group: Group,

    /// The subject row (id + variable values).
    pub subject: Subject,
}

/// One subject of the final labeled table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignedSubject {
    /// The original subject row.
    pub subject: Subject,

    /// Final group label. `None` only if the subject's id appeared in
    /// neither of the winning partition's lists — impossible for a valid
    /// partition and treated as an integrity failure by the test suite.
    pub group: Option<Group>,
}

/// The final per-subject labeling: the run's lasting artifact.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimalAssignment {
    /// The winning partition's sequence number.
    pub combo: ComboId,

    /// The winning partition's total dissimilarity.
    pub total: f64,

    /// One row per subject, in original table order.
    pub rows: Vec<AssignedSubject>,
}

/// Everything one run produces: the four collaborator-facing tables plus
/// the tie set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignResult {
    /// AllCombinations: one row per (partition × subject).
    pub combinations: Vec<ComboRow>,

    /// AllMeans: one row per (partition × group), "a" before "b".
    pub means: Vec<GroupSummary>,

    /// MeanAbsoluteDifferences: one row per partition.
    pub diffs: Vec<DiffRow>,

    /// The minimum total dissimilarity across all partitions.
    pub min_total: f64,

    /// Every partition achieving `min_total` (exact float equality),
    /// in generation order.
    pub ties: Vec<ComboId>,

    /// The final labeling from the winning partition.
    pub optimal: OptimalAssignment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_rendering() {
        assert_eq!(Group::A.as_str(), "a");
        assert_eq!(Group::B.to_string(), "b");
        assert_eq!(Group::A.other(), Group::B);
    }

    #[test]
    fn test_partition_balance() {
        let balanced = Partition {
            combo: 1,
            labels: vec![Group::A, Group::B, Group::A],
        };
        assert!(balanced.is_balanced());
        assert_eq!(balanced.count(Group::A), 2);

        let lopsided = Partition {
            combo: 2,
            labels: vec![Group::A, Group::A, Group::A, Group::B],
        };
        assert!(!lopsided.is_balanced());
    }

    #[test]
    fn test_group_label_rendering() {
        let row = DiffRow {
            combo: 1,
            diffs: vec![0.0],
            total: 0.0,
            ids_a: vec![1, 3],
            ids_b: vec![2, 4],
        };
        assert_eq!(row.group_label(), "a: [1, 3], b: [2, 4]");
    }
}
