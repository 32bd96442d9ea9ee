//! Engine configuration.
//!
//! [`AssignConfig`] holds the run parameters: the combinatorial-explosion
//! guard, the tie policy, and parallelism.

/// Policy for picking the winner when several partitions achieve the
/// minimum total dissimilarity.
///
/// Every tie is always recorded in
/// [`AssignResult::ties`](super::AssignResult::ties); this policy only
/// decides which tie is materialized into the final labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Pick the tie with the lowest sequence number (deterministic,
    /// generation-order first). The default.
    #[default]
    LowestCombo,

    /// Pick the tie with the highest sequence number.
    ///
    /// Matches the behavior of legacy runs, which effectively acted on the
    /// last tie encountered.
    LastGenerated,
}

/// Configuration for an assignment run.
///
/// # Defaults
///
/// ```
/// use cohort_split::assign::{AssignConfig, TieBreak};
///
/// let config = AssignConfig::default();
/// assert_eq!(config.max_subjects, 20);
/// assert_eq!(config.tie_break, TieBreak::LowestCombo);
/// assert!(!config.parallel);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use cohort_split::assign::{AssignConfig, TieBreak};
///
/// let config = AssignConfig::default()
///     .with_max_subjects(16)
///     .with_tie_break(TieBreak::LastGenerated);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignConfig {
    /// Maximum subject count accepted by the runner. 0 = no limit.
    ///
    /// Balanced partitions number `C(n, ⌊n/2⌋)` and the whole candidate set
    /// is materialized, so memory and time grow combinatorially with `n`.
    /// The default of 20 (≈184k partitions) is the practical ceiling for
    /// the in-memory batch model; raise it only deliberately.
    pub max_subjects: usize,

    /// Tie policy for the winning partition.
    pub tie_break: TieBreak,

    /// Whether to score and evaluate partitions in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature; otherwise ignored.
    /// Results are identical either way — partitions are independent and
    /// output order is fixed by sequence number.
    pub parallel: bool,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            max_subjects: 20,
            tie_break: TieBreak::default(),
            parallel: false,
        }
    }
}

impl AssignConfig {
    pub fn with_max_subjects(mut self, n: usize) -> Self {
        self.max_subjects = n;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.parallel && !cfg!(feature = "parallel") {
            return Err(
                "parallel = true requires the 'parallel' feature to take effect".to_string(),
            );
        }
        Ok(())
    }
}
