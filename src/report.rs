//! Plot-collaborator contract.
//!
//! A plotting collaborator renders the final assignment as two line series —
//! group "a" vs group "b" — of per-variable means across the VariableSet in
//! order. This module computes exactly those series; rendering (colors,
//! markers, axes) stays outside the core.

use crate::assign::{Group, OptimalAssignment};

/// Per-variable mean series of the two final groups.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSeries {
    /// Variable names, in table order (the x-axis).
    pub variables: Vec<String>,

    /// Group "a" mean per variable.
    pub a: Vec<f64>,

    /// Group "b" mean per variable.
    pub b: Vec<f64>,
}

/// Computes the a/b mean series over the final assignment.
///
/// `variables` is the already-filtered VariableSet (reserved and metadata
/// columns excluded) and must match the width of the assignment's subject
/// rows. An empty group yields NaN means, as everywhere else.
pub fn group_series(assignment: &OptimalAssignment, variables: &[String]) -> GroupSeries {
    GroupSeries {
        variables: variables.to_vec(),
        a: group_means(assignment, Group::A, variables.len()),
        b: group_means(assignment, Group::B, variables.len()),
    }
}

fn group_means(assignment: &OptimalAssignment, group: Group, width: usize) -> Vec<f64> {
    let mut sums = vec![0.0f64; width];
    let mut count = 0usize;
    for row in &assignment.rows {
        if row.group != Some(group) {
            continue;
        }
        count += 1;
        for (sum, &value) in sums.iter_mut().zip(&row.subject.values) {
            *sum += value;
        }
    }
    let count = count as f64;
    sums.into_iter().map(|s| s / count).collect()
}
