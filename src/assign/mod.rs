//! Balanced group-assignment engine.
//!
//! Splits a [`SubjectTable`](crate::table::SubjectTable) into two groups
//! ("a"/"b") whose sizes differ by at most one, minimizing the summed
//! absolute difference of per-variable group means over every balanced
//! bipartition.
//!
//! # Stages
//!
//! The pipeline is strictly staged; no stage depends on UI state and every
//! intermediate artifact is immutable once produced:
//!
//! 1. [`PartitionGenerator`]: enumerate all balanced label vectors.
//! 2. [`PartitionScorer`]: per-partition group means + ordered id lists.
//! 3. [`DifferenceEvaluator`]: per-variable |mean_a − mean_b| and their sum.
//! 4. [`Selector`]: minimum total, exact-equality tie set, deterministic
//!    winner ([`TieBreak`]).
//! 5. [`Materializer`]: final per-subject labeling of the original table.
//!
//! [`AssignRunner`] orchestrates the stages and assembles the four output
//! tables on [`AssignResult`]; [`ProgressSink`] receives one tick per stage.
//!
//! # Key Types
//!
//! - [`AssignConfig`]: subject-count guard, tie policy, parallelism
//! - [`AssignResult`]: AllCombinations / AllMeans / MeanAbsoluteDifferences /
//!   OptimalAssignment tables plus the tie set
//! - [`AssignError`]: run-level failures
//!
//! # Complexity
//!
//! Balanced partitions number `C(n, ⌊n/2⌋)` (doubled for odd `n`) — the
//! whole candidate set is materialized in memory, so peak memory grows
//! combinatorially with the subject count. [`AssignConfig::max_subjects`]
//! rejects oversized inputs before enumeration starts.

mod config;
mod error;
mod evaluator;
mod generator;
mod materializer;
mod progress;
mod runner;
mod scorer;
mod selector;
mod types;

pub use config::{AssignConfig, TieBreak};
pub use error::AssignError;
pub use evaluator::DifferenceEvaluator;
pub use generator::PartitionGenerator;
pub use materializer::Materializer;
pub use progress::{NoProgress, ProgressSink, Stage};
pub use runner::AssignRunner;
pub use scorer::PartitionScorer;
pub use selector::{Selection, Selector};
pub use types::{
    AssignResult, AssignedSubject, ComboId, ComboRow, DiffRow, Group, GroupSummary,
    OptimalAssignment, Partition, PartitionSummary,
};
