//! Pipeline orchestration.
//!
//! [`AssignRunner`] wires the five stages together, assembles the four
//! output tables, and reports one progress tick per stage. The whole run is
//! a synchronous batch: every candidate partition is materialized before
//! scoring, so peak memory is proportional to partition-count × n — the
//! `max_subjects` guard is checked before anything is allocated.

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::AssignConfig;
use super::error::AssignError;
use super::evaluator::DifferenceEvaluator;
use super::generator::PartitionGenerator;
use super::materializer::Materializer;
use super::progress::{NoProgress, ProgressSink, Stage};
use super::scorer::PartitionScorer;
use super::selector::Selector;
use super::types::{AssignResult, ComboRow, DiffRow, Partition, PartitionSummary};
use crate::table::SubjectTable;

/// Executes the full assignment pipeline.
///
/// # Usage
///
/// ```
/// use cohort_split::assign::{AssignConfig, AssignRunner};
/// use cohort_split::table::{Subject, SubjectTable};
///
/// let table = SubjectTable::new(
///     vec!["t0".into()],
///     vec![Subject::new(1, vec![1.0]), Subject::new(2, vec![3.0])],
/// )
/// .unwrap();
///
/// let result = AssignRunner::run(&table, &AssignConfig::default()).unwrap();
/// assert_eq!(result.min_total, 2.0);
/// ```
pub struct AssignRunner;

impl AssignRunner {
    /// Runs the pipeline without progress reporting.
    pub fn run(table: &SubjectTable, config: &AssignConfig) -> Result<AssignResult, AssignError> {
        Self::run_with_progress(table, config, &NoProgress)
    }

    /// Runs the pipeline, reporting each completed stage to `progress`.
    pub fn run_with_progress(
        table: &SubjectTable,
        config: &AssignConfig,
        progress: &dyn ProgressSink,
    ) -> Result<AssignResult, AssignError> {
        config.validate().map_err(AssignError::InvalidConfig)?;

        let n = table.len();
        if config.max_subjects > 0 && n > config.max_subjects {
            return Err(AssignError::TooManySubjects {
                n,
                limit: config.max_subjects,
            });
        }

        let mut done = 0usize;
        let mut tick = |stage: Stage| {
            done += 1;
            debug!("stage '{}' complete ({done}/{})", stage.name(), Stage::COUNT);
            progress.on_stage(stage, done);
        };

        // 1. Preconditions checked, working set fixed
        debug!(
            "assignment run: {n} subjects, {} variables, {} balanced partitions",
            table.variables().len(),
            PartitionGenerator::count(n)
        );
        tick(Stage::Copy);

        // 2. Enumerate all balanced partitions and score each one
        let partitions = PartitionGenerator::generate(n);
        let scorer = PartitionScorer::new(table);
        let summaries = summarize_all(&scorer, &partitions, config.parallel);
        let combinations = combo_rows(table, &partitions);
        tick(Stage::EnumerateScore);

        // 3. Cross-group differences
        let diffs = evaluate_all(&summaries, config.parallel);
        tick(Stage::Diff);

        // 4. Minimum total, ties, winner
        let selection =
            Selector::select(&diffs, config.tie_break).ok_or(AssignError::NoOptimum)?;
        debug!(
            "min total {} achieved by {} partition(s), winner combo {}",
            selection.min_total,
            selection.ties.len(),
            selection.winner
        );
        tick(Stage::Select);

        // 5. Index the winner, then label the original table
        let winner: &DiffRow = diffs
            .iter()
            .find(|r| r.combo == selection.winner)
            .expect("winner combo is drawn from the evaluated rows");
        let index = Materializer::group_index(winner);
        tick(Stage::IndexBuild);

        let optimal = Materializer::materialize(table, winner, &index);
        tick(Stage::Materialize);

        // AllMeans flattens each summary to its "a" row then its "b" row.
        let means = summaries
            .into_iter()
            .flat_map(|s| [s.a, s.b])
            .collect();

        progress.on_complete();
        Ok(AssignResult {
            combinations,
            means,
            diffs,
            min_total: selection.min_total,
            ties: selection.ties,
            optimal,
        })
    }
}

/// Scores every partition, in parallel when requested and available.
fn summarize_all(
    scorer: &PartitionScorer<'_>,
    partitions: &[Partition],
    parallel: bool,
) -> Vec<PartitionSummary> {
    #[cfg(feature = "parallel")]
    if parallel {
        return partitions.par_iter().map(|p| scorer.summarize(p)).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;
    partitions.iter().map(|p| scorer.summarize(p)).collect()
}

/// Evaluates every summary, in parallel when requested and available.
fn evaluate_all(summaries: &[PartitionSummary], parallel: bool) -> Vec<DiffRow> {
    #[cfg(feature = "parallel")]
    if parallel {
        return summaries
            .par_iter()
            .map(DifferenceEvaluator::evaluate)
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;
    summaries.iter().map(DifferenceEvaluator::evaluate).collect()
}

/// Builds the AllCombinations table: one row per (partition × subject).
fn combo_rows(table: &SubjectTable, partitions: &[Partition]) -> Vec<ComboRow> {
    let mut rows = Vec::with_capacity(partitions.len() * table.len());
    for partition in partitions {
        for (subject, &group) in table.subjects().iter().zip(&partition.labels) {
            rows.push(ComboRow {
                combo: partition.combo,
                group,
                subject: subject.clone(),
            });
        }
    }
    rows
}
