//! Balanced partition enumeration.
//!
//! Emits every label vector of length `n` whose two label counts differ by
//! at most one. Only the surviving subset sizes are enumerated — `n/2` for
//! even `n`, both `⌊n/2⌋` and `⌈n/2⌉` for odd `n` — so no discarded
//! candidates are ever built.
//!
//! Ordering: subset sizes ascending, then lexicographic by "a"-index set
//! within each size. Sequence numbers (`combo`) follow this order, 1-based.

use super::types::{ComboId, Group, Partition};

/// Enumerates all balanced bipartitions of `n` subject positions.
pub struct PartitionGenerator;

impl PartitionGenerator {
    /// The "a"-side sizes that satisfy the balance constraint for `n`.
    pub fn balanced_sizes(n: usize) -> Vec<usize> {
        if n % 2 == 0 {
            vec![n / 2]
        } else {
            vec![n / 2, n / 2 + 1]
        }
    }

    /// Number of balanced partitions of `n` positions:
    /// `C(n, ⌊n/2⌋)` plus `C(n, ⌈n/2⌉)` when `n` is odd.
    ///
    /// Used for the explosion guard and capacity pre-allocation; `u128`
    /// keeps the count exact far beyond any feasible run.
    pub fn count(n: usize) -> u128 {
        Self::balanced_sizes(n)
            .into_iter()
            .map(|k| binomial(n, k))
            .sum()
    }

    /// Generates every balanced partition of `n` positions, numbered from 1.
    pub fn generate(n: usize) -> Vec<Partition> {
        // Count overflowing usize means the run is hopeless anyway; skip
        // pre-allocation rather than request an absurd capacity.
        let capacity = usize::try_from(Self::count(n)).unwrap_or(0);
        let mut partitions = Vec::with_capacity(capacity);
        let mut combo: ComboId = 1;

        for k in Self::balanced_sizes(n) {
            for_each_combination(n, k, |indices| {
                let mut labels = vec![Group::B; n];
                for &i in indices {
                    labels[i] = Group::A;
                }
                partitions.push(Partition { combo, labels });
                combo += 1;
            });
        }

        partitions
    }
}

/// Exact binomial coefficient via the multiplicative formula.
fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=k {
        result = result * (n - k + i) as u128 / i as u128;
    }
    result
}

/// Visits every k-combination of `0..n` in lexicographic order.
fn for_each_combination<F: FnMut(&[usize])>(n: usize, k: usize, mut visit: F) {
    if k > n {
        return;
    }
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        visit(&indices);
        if k == 0 {
            return;
        }
        // Rightmost index that can still advance.
        let mut i = k;
        while i > 0 && indices[i - 1] == n - k + i - 1 {
            i -= 1;
        }
        if i == 0 {
            return;
        }
        indices[i - 1] += 1;
        for j in i..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(5, 3), 10);
        assert_eq!(binomial(20, 10), 184_756);
        assert_eq!(binomial(3, 5), 0);
    }

    #[test]
    fn test_balanced_sizes() {
        assert_eq!(PartitionGenerator::balanced_sizes(4), vec![2]);
        assert_eq!(PartitionGenerator::balanced_sizes(5), vec![2, 3]);
        assert_eq!(PartitionGenerator::balanced_sizes(1), vec![0, 1]);
    }

    #[test]
    fn test_count_matches_formula() {
        assert_eq!(PartitionGenerator::count(1), 2);
        assert_eq!(PartitionGenerator::count(2), 2);
        assert_eq!(PartitionGenerator::count(4), 6);
        assert_eq!(PartitionGenerator::count(5), 20);
        assert_eq!(PartitionGenerator::count(6), 20);
    }

    #[test]
    fn test_generate_matches_count_and_is_balanced() {
        for n in 1..=8 {
            let partitions = PartitionGenerator::generate(n);
            assert_eq!(partitions.len() as u128, PartitionGenerator::count(n));
            for p in &partitions {
                assert_eq!(p.labels.len(), n);
                assert!(p.is_balanced(), "unbalanced partition for n={n}: {p:?}");
            }
        }
    }

    #[test]
    fn test_combo_ids_are_sequential_from_one() {
        let partitions = PartitionGenerator::generate(5);
        for (i, p) in partitions.iter().enumerate() {
            assert_eq!(p.combo, (i + 1) as u64);
        }
    }

    #[test]
    fn test_generate_has_no_duplicates() {
        let partitions = PartitionGenerator::generate(6);
        let mut seen: std::collections::HashSet<Vec<Group>> = std::collections::HashSet::new();
        for p in &partitions {
            assert!(seen.insert(p.labels.clone()), "duplicate: {:?}", p.labels);
        }
    }

    #[test]
    fn test_generate_is_exactly_the_balanced_set() {
        // Cross-check against brute force over all 2^n label vectors.
        for n in 1..=6 {
            let generated: std::collections::HashSet<Vec<Group>> = PartitionGenerator::generate(n)
                .into_iter()
                .map(|p| p.labels)
                .collect();

            let mut expected = std::collections::HashSet::new();
            for mask in 0u32..(1 << n) {
                let labels: Vec<Group> = (0..n)
                    .map(|i| {
                        if mask & (1 << i) != 0 {
                            Group::A
                        } else {
                            Group::B
                        }
                    })
                    .collect();
                let a = labels.iter().filter(|&&g| g == Group::A).count();
                if a.abs_diff(n - a) <= 1 {
                    expected.insert(labels);
                }
            }

            assert_eq!(generated, expected, "mismatch for n={n}");
        }
    }

    #[test]
    fn test_lexicographic_order_for_n4() {
        let partitions = PartitionGenerator::generate(4);
        let a_sets: Vec<Vec<usize>> = partitions
            .iter()
            .map(|p| {
                p.labels
                    .iter()
                    .enumerate()
                    .filter(|(_, &g)| g == Group::A)
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();
        assert_eq!(
            a_sets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }
}
