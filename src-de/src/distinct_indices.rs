use rand::Rng;
use rand::seq::index::sample;

/// Draw `count` pairwise distinct indices from `0..np`, never returning `exclude`.
///
/// Sampling is uniform and without replacement. Callers guarantee
/// `count < np` and `exclude < np`.
pub(crate) fn distinct_indices<R: Rng + ?Sized>(
    exclude: usize,
    count: usize,
    np: usize,
    rng: &mut R,
) -> Vec<usize> {
    debug_assert!(exclude < np && count < np);
    // sample from the np-1 slots left once `exclude` is removed, then shift back
    sample(rng, np - 1, count)
        .into_iter()
        .map(|j| if j >= exclude { j + 1 } else { j })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_indices_are_distinct_and_exclude_target() {
        let mut rng = StdRng::seed_from_u64(7);
        for np in 4..12 {
            for i in 0..np {
                for _ in 0..50 {
                    let idxs = distinct_indices(i, 3, np, &mut rng);
                    assert_eq!(idxs.len(), 3);
                    let set: HashSet<_> = idxs.iter().copied().collect();
                    assert_eq!(set.len(), 3, "duplicates in {:?}", idxs);
                    assert!(!set.contains(&i), "target {} selected in {:?}", i, idxs);
                    assert!(idxs.iter().all(|&j| j < np));
                }
            }
        }
    }

    #[test]
    fn test_minimal_population_uses_all_others() {
        let mut rng = StdRng::seed_from_u64(11);
        for i in 0..4 {
            let mut idxs = distinct_indices(i, 3, 4, &mut rng);
            idxs.sort_unstable();
            let expected: Vec<usize> = (0..4).filter(|&j| j != i).collect();
            assert_eq!(idxs, expected);
        }
    }

    #[test]
    fn test_every_other_index_is_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let np = 8;
        let target = 5;
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.extend(distinct_indices(target, 3, np, &mut rng));
        }
        let expected: HashSet<usize> = (0..np).filter(|&j| j != target).collect();
        assert_eq!(seen, expected);
    }
}
