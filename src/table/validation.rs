//! Input integrity checks.
//!
//! Runs at table construction so the engine never sees a malformed table:
//! duplicate ids, ragged rows, reserved column names, mis-sized metadata.

use std::collections::HashSet;
use std::fmt;

use super::types::{Subject, SubjectId, RESERVED_COLUMNS};

/// Integrity failure in the input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table has no subjects. The engine requires `n >= 1`.
    Empty,

    /// The table has no variable columns to score.
    NoVariables,

    /// Two subjects share the same id.
    DuplicateId(SubjectId),

    /// A subject row's value count does not match the variable count.
    RowWidth {
        /// The offending subject.
        id: SubjectId,
        /// Expected value count (the variable count).
        expected: usize,
        /// Actual value count.
        found: usize,
    },

    /// A variable or metadata column uses a reserved or already-taken name.
    ReservedColumn(String),

    /// A metadata column's length does not match the subject count.
    MetadataLength {
        /// The offending column.
        name: String,
        /// Expected length (the subject count).
        expected: usize,
        /// Actual length.
        found: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Empty => write!(f, "subject table is empty"),
            TableError::NoVariables => write!(f, "subject table has no variable columns"),
            TableError::DuplicateId(id) => write!(f, "duplicate subject id {id}"),
            TableError::RowWidth {
                id,
                expected,
                found,
            } => write!(
                f,
                "subject {id} has {found} values, expected {expected} (one per variable)"
            ),
            TableError::ReservedColumn(name) => {
                write!(f, "column name '{name}' is reserved or already in use")
            }
            TableError::MetadataLength {
                name,
                expected,
                found,
            } => write!(
                f,
                "metadata column '{name}' has {found} values, expected {expected} (one per subject)"
            ),
        }
    }
}

impl std::error::Error for TableError {}

/// Validates variable names and subject rows for table construction.
pub(super) fn check_table(variables: &[String], subjects: &[Subject]) -> Result<(), TableError> {
    if subjects.is_empty() {
        return Err(TableError::Empty);
    }
    if variables.is_empty() {
        return Err(TableError::NoVariables);
    }

    let mut names: HashSet<&str> = HashSet::with_capacity(variables.len());
    for name in variables {
        if RESERVED_COLUMNS.contains(&name.as_str()) || !names.insert(name.as_str()) {
            return Err(TableError::ReservedColumn(name.clone()));
        }
    }

    let mut ids: HashSet<SubjectId> = HashSet::with_capacity(subjects.len());
    for subject in subjects {
        if !ids.insert(subject.id) {
            return Err(TableError::DuplicateId(subject.id));
        }
        if subject.values.len() != variables.len() {
            return Err(TableError::RowWidth {
                id: subject.id,
                expected: variables.len(),
                found: subject.values.len(),
            });
        }
    }

    Ok(())
}

/// Validates a metadata column before attachment.
pub(super) fn check_metadata(
    name: &str,
    values: &[String],
    variables: &[String],
    subject_count: usize,
) -> Result<(), TableError> {
    if RESERVED_COLUMNS.contains(&name) || variables.iter().any(|v| v == name) {
        return Err(TableError::ReservedColumn(name.to_string()));
    }
    if values.len() != subject_count {
        return Err(TableError::MetadataLength {
            name: name.to_string(),
            expected: subject_count,
            found: values.len(),
        });
    }
    Ok(())
}
