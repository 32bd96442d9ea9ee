//! Final labeling of the original table.
//!
//! Two sub-steps, matching the last two pipeline stages: build an
//! id → group index from the winning [`DiffRow`]'s two identifier lists,
//! then walk the original table and label every subject through the index.
//! The lists are consumed structurally — nothing is serialized and parsed
//! back.

use std::collections::HashMap;

use super::types::{AssignedSubject, DiffRow, Group, OptimalAssignment};
use crate::table::{SubjectId, SubjectTable};

/// Produces the [`OptimalAssignment`] from the winning partition.
pub struct Materializer;

impl Materializer {
    /// Builds the id → group lookup from the winner's identifier lists.
    pub fn group_index(winner: &DiffRow) -> HashMap<SubjectId, Group> {
        let mut index = HashMap::with_capacity(winner.ids_a.len() + winner.ids_b.len());
        for &id in &winner.ids_a {
            index.insert(id, Group::A);
        }
        for &id in &winner.ids_b {
            index.insert(id, Group::B);
        }
        index
    }

    /// Labels every subject of `table` through `index`.
    ///
    /// An id absent from the index yields `group: None`. The winner's two
    /// lists partition all ids by construction, so `None` never appears for
    /// a valid partition; the test suite treats one as an integrity failure.
    pub fn materialize(
        table: &SubjectTable,
        winner: &DiffRow,
        index: &HashMap<SubjectId, Group>,
    ) -> OptimalAssignment {
        let rows = table
            .subjects()
            .iter()
            .map(|subject| AssignedSubject {
                subject: subject.clone(),
                group: index.get(&subject.id).copied(),
            })
            .collect();

        OptimalAssignment {
            combo: winner.combo,
            total: winner.total,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Subject, SubjectTable};

    fn winner() -> DiffRow {
        DiffRow {
            combo: 3,
            diffs: vec![0.0],
            total: 0.0,
            ids_a: vec![1, 3],
            ids_b: vec![2, 4],
        }
    }

    fn table() -> SubjectTable {
        SubjectTable::new(
            vec!["t0".into()],
            vec![
                Subject::new(1, vec![1.0]),
                Subject::new(2, vec![2.0]),
                Subject::new(3, vec![3.0]),
                Subject::new(4, vec![4.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_index_covers_both_lists() {
        let index = Materializer::group_index(&winner());
        assert_eq!(index.len(), 4);
        assert_eq!(index[&1], Group::A);
        assert_eq!(index[&3], Group::A);
        assert_eq!(index[&2], Group::B);
        assert_eq!(index[&4], Group::B);
    }

    #[test]
    fn test_every_subject_labeled_exactly_once() {
        let table = table();
        let winner = winner();
        let index = Materializer::group_index(&winner);
        let assignment = Materializer::materialize(&table, &winner, &index);

        assert_eq!(assignment.combo, 3);
        assert_eq!(assignment.rows.len(), table.len());
        for row in &assignment.rows {
            assert!(
                row.group.is_some(),
                "subject {} left unassigned",
                row.subject.id
            );
        }
        let a_count = assignment
            .rows
            .iter()
            .filter(|r| r.group == Some(Group::A))
            .count();
        assert_eq!(a_count, 2);
    }

    #[test]
    fn test_rows_preserve_table_order() {
        let table = table();
        let winner = winner();
        let index = Materializer::group_index(&winner);
        let assignment = Materializer::materialize(&table, &winner, &index);

        let ids: Vec<_> = assignment.rows.iter().map(|r| r.subject.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_id_stays_unset() {
        // A winner that (incorrectly) omits subject 4.
        let partial = DiffRow {
            ids_b: vec![2],
            ..winner()
        };
        let index = Materializer::group_index(&partial);
        let assignment = Materializer::materialize(&table(), &partial, &index);
        assert_eq!(assignment.rows[3].group, None);
    }
}
