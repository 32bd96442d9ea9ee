//! Exhaustive balanced group assignment for experimental cohorts.
//!
//! Given a table of subjects — each with a unique integer id and a set of
//! measured numeric variables (e.g. repeated behavioral measurements) — this
//! crate enumerates every way to split the subjects into two groups, "a" and
//! "b", whose sizes differ by at most one, scores each candidate split by how
//! close its per-variable group means are, and selects the split with the
//! minimum total cross-group difference.
//!
//! # Pipeline
//!
//! The engine is a strict five-stage batch pipeline:
//!
//! 1. **Generator**: enumerate all balanced bipartitions of the subject set.
//! 2. **Scorer**: per partition, compute each group's per-variable means and
//!    ordered subject-id list.
//! 3. **Evaluator**: per partition, compute the per-variable absolute
//!    difference between the two group means and their sum (total
//!    dissimilarity).
//! 4. **Selector**: find the minimum total, collect ties, pick a winner
//!    deterministically.
//! 5. **Materializer**: label every subject of the original table with the
//!    winning partition's group assignments.
//!
//! Everything runs in memory in one shot; the number of balanced partitions
//! is `C(n, n/2)` (twice that for odd `n`), so the subject count is the hard
//! scalability limit and the runner guards it explicitly
//! ([`assign::AssignConfig::max_subjects`]).
//!
//! # Quick Start
//!
//! ```
//! use cohort_split::assign::{AssignConfig, AssignRunner};
//! use cohort_split::table::{Subject, SubjectTable};
//!
//! let table = SubjectTable::new(
//!     vec!["t0".into(), "t1".into()],
//!     vec![
//!         Subject::new(1, vec![10.0, 20.0]),
//!         Subject::new(2, vec![10.0, 20.0]),
//!         Subject::new(3, vec![12.0, 18.0]),
//!         Subject::new(4, vec![12.0, 18.0]),
//!     ],
//! )
//! .unwrap();
//!
//! let result = AssignRunner::run(&table, &AssignConfig::default()).unwrap();
//! assert_eq!(result.min_total, 0.0);
//! for row in &result.optimal.rows {
//!     println!("subject {} -> {:?}", row.subject.id, row.group);
//! }
//! ```
//!
//! # Collaborators
//!
//! File selection, spreadsheet export, progress-bar UI, and plotting are
//! external collaborators. The core exposes their contracts without holding
//! any UI state: the four derived tables on [`assign::AssignResult`], the
//! [`assign::ProgressSink`] stage callback, and the [`report`] module's
//! per-variable group-mean series for plotting.

pub mod assign;
pub mod report;
pub mod table;
