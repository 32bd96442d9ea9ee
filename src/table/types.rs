//! Subject and table types.

use super::validation::{self, TableError};

/// Unique integer identifier of one subject.
///
/// Identifiers are immutable for the duration of a run and must be unique
/// within a [`SubjectTable`].
pub type SubjectId = i64;

/// Column names that can never be variable names.
///
/// These are claimed by the engine's own output columns: the final group
/// label, the partition sequence number, and the subject identifier.
pub const RESERVED_COLUMNS: [&str; 3] = ["group", "combo", "id"];

/// One experimental unit: a unique id plus one value per measured variable.
///
/// `values` is ordered to match the owning table's variable list. A missing
/// measurement is stored as [`f64::NAN`] and propagates through scoring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subject {
    /// Unique identifier.
    pub id: SubjectId,

    /// Measured values, one per variable, in table variable order.
    pub values: Vec<f64>,
}

impl Subject {
    /// Creates a subject from an id and its measured values.
    pub fn new(id: SubjectId, values: Vec<f64>) -> Self {
        Self { id, values }
    }
}

/// A non-numeric column carried alongside the subjects (e.g. `cage`).
///
/// Metadata is excluded from scoring; it exists so export collaborators can
/// reproduce the original table's columns in the final output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetadataColumn {
    /// Column name.
    pub name: String,

    /// One value per subject, in table row order.
    pub values: Vec<String>,
}

/// A validated rectangular table of subjects.
///
/// # Examples
///
/// ```
/// use cohort_split::table::{Subject, SubjectTable};
///
/// let table = SubjectTable::new(
///     vec!["day1".into(), "day2".into()],
///     vec![
///         Subject::new(1, vec![3.5, 4.0]),
///         Subject::new(2, vec![2.5, 5.0]),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.variables(), ["day1", "day2"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubjectTable {
    variables: Vec<String>,
    subjects: Vec<Subject>,
    metadata: Vec<MetadataColumn>,
}

impl SubjectTable {
    /// Creates a table from variable names and subject rows.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] when the table is empty, has no variables,
    /// contains a duplicate id, a ragged row, or a reserved variable name.
    pub fn new(variables: Vec<String>, subjects: Vec<Subject>) -> Result<Self, TableError> {
        validation::check_table(&variables, &subjects)?;
        Ok(Self {
            variables,
            subjects,
            metadata: Vec::new(),
        })
    }

    /// Attaches a non-numeric metadata column (consumed-and-returned builder).
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MetadataLength`] when the column's length does
    /// not match the subject count, or [`TableError::ReservedColumn`] when
    /// its name collides with a reserved or variable column.
    pub fn with_metadata(
        mut self,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<Self, TableError> {
        let name = name.into();
        validation::check_metadata(&name, &values, &self.variables, self.subjects.len())?;
        self.metadata.push(MetadataColumn { name, values });
        Ok(self)
    }

    /// Number of subjects.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the table has no subjects. Always `false` for a constructed
    /// table (construction requires at least one subject).
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Ordered variable names (the VariableSet used for scoring).
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Subject rows in input order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Metadata columns in attachment order.
    pub fn metadata(&self) -> &[MetadataColumn] {
        &self.metadata
    }

    /// All subject ids in row order.
    pub fn ids(&self) -> impl Iterator<Item = SubjectId> + '_ {
        self.subjects.iter().map(|s| s.id)
    }
}

/// Filters raw column names down to the scoring VariableSet.
///
/// Drops the reserved columns (`group`, `combo`, `id`) and any caller-named
/// metadata columns, preserving input order. Order is significant for
/// display only, never for scoring.
///
/// # Examples
///
/// ```
/// use cohort_split::table::variable_set;
///
/// let columns = ["id", "t0", "t1", "cage", "group"];
/// assert_eq!(variable_set(&columns, &["cage"]), vec!["t0", "t1"]);
/// ```
pub fn variable_set(columns: &[&str], metadata: &[&str]) -> Vec<String> {
    columns
        .iter()
        .filter(|c| !RESERVED_COLUMNS.contains(*c) && !metadata.contains(*c))
        .map(|c| c.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> SubjectTable {
        SubjectTable::new(
            vec!["t0".into(), "t1".into()],
            vec![
                Subject::new(1, vec![1.0, 2.0]),
                Subject::new(2, vec![3.0, 4.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_table_accessors() {
        let table = two_by_two();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.variables(), ["t0", "t1"]);
        assert_eq!(table.ids().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_metadata_attaches() {
        let table = two_by_two()
            .with_metadata("cage", vec!["c1".into(), "c2".into()])
            .unwrap();
        assert_eq!(table.metadata().len(), 1);
        assert_eq!(table.metadata()[0].name, "cage");
    }

    #[test]
    fn test_variable_set_filters_reserved_and_metadata() {
        let columns = ["id", "t0", "cage", "t1", "group", "combo"];
        assert_eq!(variable_set(&columns, &["cage"]), vec!["t0", "t1"]);
    }

    #[test]
    fn test_variable_set_preserves_order() {
        let columns = ["z", "a", "m"];
        assert_eq!(variable_set(&columns, &[]), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_nan_values_are_stored_verbatim() {
        let table = SubjectTable::new(
            vec!["t0".into()],
            vec![Subject::new(1, vec![f64::NAN])],
        )
        .unwrap();
        assert!(table.subjects()[0].values[0].is_nan());
    }
}
