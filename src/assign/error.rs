//! Run-level errors.

use std::fmt;

/// Failure of an assignment run.
///
/// All failures are local to one run; nothing partial is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// The configuration failed [`AssignConfig::validate`](super::AssignConfig::validate).
    InvalidConfig(String),

    /// The subject count exceeds [`AssignConfig::max_subjects`](super::AssignConfig::max_subjects).
    ///
    /// Raised before any enumeration: the balanced-partition count is
    /// combinatorial in `n` and an unguarded run would exhaust memory
    /// rather than fail gracefully.
    TooManySubjects {
        /// Subject count of the input table.
        n: usize,
        /// Configured limit.
        limit: usize,
    },

    /// No partition has a defined (non-NaN) total dissimilarity, so no
    /// minimum exists. Happens only when every variable mean is undefined.
    NoOptimum,
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            AssignError::TooManySubjects { n, limit } => write!(
                f,
                "{n} subjects exceeds the limit of {limit}; \
                 balanced-partition count grows combinatorially \
                 (raise max_subjects deliberately or set it to 0)"
            ),
            AssignError::NoOptimum => {
                write!(f, "no partition has a defined total dissimilarity")
            }
        }
    }
}

impl std::error::Error for AssignError {}
