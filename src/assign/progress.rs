//! Progress reporting capability.
//!
//! The runner reports one tick per pipeline stage through a caller-supplied
//! [`ProgressSink`]. The core never holds UI state — a progress-bar widget,
//! a channel sender, or nothing at all ([`NoProgress`]) can sit behind the
//! trait.

/// The six pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Working copy of the input table prepared, preconditions checked.
    Copy,

    /// All balanced partitions enumerated and scored.
    EnumerateScore,

    /// Per-variable absolute mean differences computed.
    Diff,

    /// Minimum total found, ties collected, winner chosen.
    Select,

    /// Winning partition's id → group index built.
    IndexBuild,

    /// Final labeled table produced.
    Materialize,
}

impl Stage {
    /// Total number of stages.
    pub const COUNT: usize = 6;

    /// Zero-based position of this stage in execution order.
    pub fn index(self) -> usize {
        match self {
            Stage::Copy => 0,
            Stage::EnumerateScore => 1,
            Stage::Diff => 2,
            Stage::Select => 3,
            Stage::IndexBuild => 4,
            Stage::Materialize => 5,
        }
    }

    /// Short stage name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Copy => "copy",
            Stage::EnumerateScore => "enumerate+score",
            Stage::Diff => "diff",
            Stage::Select => "select",
            Stage::IndexBuild => "index-build",
            Stage::Materialize => "materialize",
        }
    }
}

/// Receiver of pipeline progress ticks.
///
/// # Contract
///
/// [`on_stage`](ProgressSink::on_stage) is called exactly once per [`Stage`],
/// in execution order, with `done` increasing monotonically from 1 to
/// [`Stage::COUNT`]. [`on_complete`](ProgressSink::on_complete) fires once
/// after the last stage of a successful run; a failed run never reaches it.
pub trait ProgressSink {
    /// Called after `stage` completes; `done` stages are finished so far.
    fn on_stage(&self, stage: Stage, done: usize);

    /// Called once after the whole pipeline succeeds.
    ///
    /// Export collaborators typically surface their artifact name to the
    /// user from here. The default implementation does nothing.
    fn on_complete(&self) {}
}

/// A sink that ignores all progress.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_stage(&self, _stage: Stage, _done: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_indices_cover_count() {
        let stages = [
            Stage::Copy,
            Stage::EnumerateScore,
            Stage::Diff,
            Stage::Select,
            Stage::IndexBuild,
            Stage::Materialize,
        ];
        assert_eq!(stages.len(), Stage::COUNT);
        for (i, stage) in stages.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }
}
