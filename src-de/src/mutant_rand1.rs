use ndarray::{Array1, Array2};
use rand::Rng;

use crate::distinct_indices::distinct_indices;

/// rand/1 differential term `pop[r0] + scale * (pop[r1] - pop[r2])`,
/// with r0, r1, r2 distinct and different from `i`.
pub(crate) fn mutant_rand1<R: Rng + ?Sized>(
    i: usize,
    pop: &Array2<f64>,
    scale: f64,
    rng: &mut R,
) -> Array1<f64> {
    let idxs = distinct_indices(i, 3, pop.nrows(), rng);
    let r0 = idxs[0];
    let r1 = idxs[1];
    let r2 = idxs[2];
    &pop.row(r0) + &((&pop.row(r1) - &pop.row(r2)) * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_scale_copies_a_donor() {
        let pop = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            let m = mutant_rand1(0, &pop, 0.0, &mut rng);
            assert_eq!(m[0], m[1]);
            assert!(m[0] == 1.0 || m[0] == 2.0 || m[0] == 3.0);
        }
    }

    #[test]
    fn test_identical_population_yields_same_point() {
        let pop = Array2::from_elem((5, 3), 4.5);
        let mut rng = StdRng::seed_from_u64(9);
        let m = mutant_rand1(2, &pop, 0.8, &mut rng);
        assert!(m.iter().all(|&v| v == 4.5));
    }
}
