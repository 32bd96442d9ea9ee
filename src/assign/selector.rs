//! Minimum-dissimilarity selection.
//!
//! Finds the minimum total across all [`DiffRow`]s, collects every row that
//! ties it under exact floating-point equality (no tolerance band — ties are
//! expected when variable values repeat), and picks one winner per the
//! configured [`TieBreak`] policy.
//!
//! NaN totals can never win: the minimum is tracked with a strict `<`
//! comparison starting from `f64::INFINITY`, and NaN compares false. A run
//! whose totals are all NaN selects nothing.

use super::config::TieBreak;
use super::types::{ComboId, DiffRow};

/// Outcome of the selection stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The minimum total dissimilarity.
    pub min_total: f64,

    /// Every partition achieving `min_total`, in generation order.
    pub ties: Vec<ComboId>,

    /// The tie chosen for materialization.
    pub winner: ComboId,
}

/// Finds the optimal partition(s) among evaluated rows.
pub struct Selector;

impl Selector {
    /// Selects the minimum-total row set; `None` when `diffs` is empty or
    /// every total is NaN.
    pub fn select(diffs: &[DiffRow], tie_break: TieBreak) -> Option<Selection> {
        let mut min_total = f64::INFINITY;
        for row in diffs {
            if row.total < min_total {
                min_total = row.total;
            }
        }

        // An all-NaN (or empty) input leaves min_total at infinity with no
        // row equal to it, so the tie set comes out empty.
        let ties: Vec<ComboId> = diffs
            .iter()
            .filter(|r| r.total == min_total)
            .map(|r| r.combo)
            .collect();
        if ties.is_empty() {
            return None;
        }

        let winner = match tie_break {
            TieBreak::LowestCombo => ties[0],
            TieBreak::LastGenerated => *ties.last().expect("ties is non-empty"),
        };

        Some(Selection {
            min_total,
            ties,
            winner,
        })
    }
}
