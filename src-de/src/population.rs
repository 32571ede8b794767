use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

use crate::argmin;

/// Working set of candidates and their cached objective values.
///
/// `fitness[i]` is always `objective(members.row(i))`: the only mutator,
/// [`Population::replace`], writes both together.
#[derive(Debug, Clone)]
pub struct Population {
    members: Array2<f64>,
    fitness: Array1<f64>,
}

impl Population {
    /// Draw `np` candidates uniformly in `[lower, upper)^dim` and evaluate each once.
    pub fn init_random<F, R>(
        np: usize,
        dim: usize,
        bounds: (f64, f64),
        func: &F,
        rng: &mut R,
    ) -> Self
    where
        F: Fn(&Array1<f64>) -> f64,
        R: Rng + ?Sized,
    {
        let (lower, upper) = bounds;
        let mut members = Array2::<f64>::zeros((np, dim));
        for i in 0..np {
            for j in 0..dim {
                members[[i, j]] = rng.random_range(lower..upper);
            }
        }
        let fitness = members.rows().into_iter().map(|row| func(&row.to_owned())).collect();
        Self { members, fitness }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(members: Array2<f64>, fitness: Array1<f64>) -> Self {
        Self { members, fitness }
    }

    /// Overwrite slot `i` with `candidate` and its objective value.
    pub fn replace(&mut self, i: usize, candidate: ArrayView1<f64>, fitness: f64) {
        self.members.row_mut(i).assign(&candidate);
        self.fitness[i] = fitness;
    }

    pub fn len(&self) -> usize {
        self.members.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.members.nrows() == 0
    }

    pub fn dim(&self) -> usize {
        self.members.ncols()
    }

    pub fn members(&self) -> &Array2<f64> {
        &self.members
    }

    pub fn fitness(&self) -> &Array1<f64> {
        &self.fitness
    }

    pub fn member(&self, i: usize) -> ArrayView1<'_, f64> {
        self.members.row(i)
    }

    /// Index and value of the first minimum fitness
    pub fn best(&self) -> (usize, f64) {
        argmin(&self.fitness)
    }

    pub fn best_fitness(&self) -> f64 {
        self.best().1
    }

    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.members, self.fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sphere(x: &Array1<f64>) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    #[test]
    fn test_init_within_bounds_and_cached() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = Population::init_random(20, 3, (-10.0, 10.0), &sphere, &mut rng);
        assert_eq!(pop.len(), 20);
        assert_eq!(pop.dim(), 3);
        assert!(pop.members().iter().all(|&v| (-10.0..10.0).contains(&v)));
        for i in 0..pop.len() {
            assert_eq!(pop.fitness()[i], sphere(&pop.member(i).to_owned()));
        }
    }

    #[test]
    fn test_replace_updates_member_and_fitness() {
        let mut pop = Population::from_parts(array![[1.0, 1.0], [2.0, 2.0]], array![2.0, 8.0]);
        let x = array![0.5, 0.0];
        pop.replace(1, x.view(), sphere(&x));
        assert_eq!(pop.member(1), x.view());
        assert_eq!(pop.fitness()[1], 0.25);
        assert_eq!(pop.best(), (1, 0.25));
    }

    #[test]
    fn test_best_returns_first_minimum() {
        let pop = Population::from_parts(
            array![[0.0], [1.0], [2.0]],
            array![3.0, 1.0, 1.0],
        );
        assert_eq!(pop.best(), (1, 1.0));
        assert_eq!(pop.best_fitness(), 1.0);
    }
}
