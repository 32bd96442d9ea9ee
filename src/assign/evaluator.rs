//! Cross-group difference evaluation.
//!
//! Turns one [`PartitionSummary`] into one [`DiffRow`]: per-variable
//! `|mean_a − mean_b|` plus the summed total dissimilarity.
//!
//! Invariant: `diffs` is positionally aligned with the table's variable
//! order — downstream summation and any export are column-position-based,
//! never name-based. NaN means produce NaN differences and a NaN total.

use super::types::{DiffRow, PartitionSummary};

/// Computes [`DiffRow`]s from partition summaries.
pub struct DifferenceEvaluator;

impl DifferenceEvaluator {
    /// Evaluates one partition's cross-group differences.
    pub fn evaluate(summary: &PartitionSummary) -> DiffRow {
        let diffs: Vec<f64> = summary
            .a
            .means
            .iter()
            .zip(&summary.b.means)
            .map(|(a, b)| (a - b).abs())
            .collect();
        let total = diffs.iter().sum();

        DiffRow {
            combo: summary.combo,
            diffs,
            total,
            ids_a: summary.a.ids.clone(),
            ids_b: summary.b.ids.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::types::{Group, GroupSummary};

    fn summary(a_means: Vec<f64>, b_means: Vec<f64>) -> PartitionSummary {
        PartitionSummary {
            combo: 1,
            a: GroupSummary {
                combo: 1,
                group: Group::A,
                means: a_means,
                ids: vec![1, 2],
            },
            b: GroupSummary {
                combo: 1,
                group: Group::B,
                means: b_means,
                ids: vec![3, 4],
            },
        }
    }

    #[test]
    fn test_diffs_and_total() {
        let row = DifferenceEvaluator::evaluate(&summary(vec![10.0, 20.0], vec![12.0, 18.0]));
        assert_eq!(row.diffs, vec![2.0, 2.0]);
        assert_eq!(row.total, 4.0);
        assert_eq!(row.ids_a, vec![1, 2]);
        assert_eq!(row.ids_b, vec![3, 4]);
    }

    #[test]
    fn test_total_is_symmetric_under_label_swap() {
        let forward = DifferenceEvaluator::evaluate(&summary(vec![3.0, 9.5], vec![7.0, 1.5]));
        let swapped = DifferenceEvaluator::evaluate(&summary(vec![7.0, 1.5], vec![3.0, 9.5]));
        assert_eq!(forward.diffs, swapped.diffs);
        assert_eq!(forward.total, swapped.total);
    }

    #[test]
    fn test_diff_order_follows_mean_positions() {
        let row = DifferenceEvaluator::evaluate(&summary(vec![0.0, 10.0, 5.0], vec![1.0, 4.0, 5.0]));
        assert_eq!(row.diffs, vec![1.0, 6.0, 0.0]);
    }

    #[test]
    fn test_nan_mean_propagates_to_total() {
        let row = DifferenceEvaluator::evaluate(&summary(vec![f64::NAN, 2.0], vec![1.0, 2.0]));
        assert!(row.diffs[0].is_nan());
        assert_eq!(row.diffs[1], 0.0);
        assert!(row.total.is_nan());
    }
}
