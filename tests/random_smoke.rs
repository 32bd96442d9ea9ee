//! End-to-end smoke test on a larger randomized table.

use rand::Rng;

use cohort_split::assign::{AssignConfig, AssignRunner, Group};
use cohort_split::report;
use cohort_split::table::{Subject, SubjectTable};

#[test]
fn twelve_random_subjects_end_to_end() {
    let mut rng = rand::rng();
    let vars = 5usize;
    let variables: Vec<String> = (0..vars).map(|v| format!("day{v}")).collect();
    let subjects: Vec<Subject> = (1..=12)
        .map(|id| {
            let values = (0..vars).map(|_| rng.random_range(0.0..50.0)).collect();
            Subject::new(id, values)
        })
        .collect();
    let table = SubjectTable::new(variables, subjects)
        .unwrap()
        .with_metadata("cage", (1..=12).map(|i| format!("c{}", (i + 1) / 2)).collect())
        .unwrap();

    let result = AssignRunner::run(&table, &AssignConfig::default()).unwrap();

    // 12 subjects: C(12, 6) = 924 balanced partitions.
    assert_eq!(result.diffs.len(), 924);
    assert_eq!(result.means.len(), 2 * 924);
    assert_eq!(result.combinations.len(), 924 * 12);

    // Groups are exactly 6/6 and every subject is placed.
    let a = result
        .optimal
        .rows
        .iter()
        .filter(|r| r.group == Some(Group::A))
        .count();
    assert_eq!(a, 6);
    assert!(result.optimal.rows.iter().all(|r| r.group.is_some()));

    // The winner really is minimal.
    assert!(result.diffs.iter().all(|r| result.min_total <= r.total));

    // Plot series stay finite and aligned with the VariableSet.
    let series = report::group_series(&result.optimal, table.variables());
    assert_eq!(series.variables.len(), vars);
    assert!(series.a.iter().chain(&series.b).all(|m| m.is_finite()));
}
