use ndarray::Array1;
use rand::Rng;

/// Binomial crossover: each coordinate independently comes from `donor`
/// with probability `cr`, otherwise from `target`.
///
/// There is no forced donor coordinate, so with a small `cr` the offspring
/// can be an exact copy of the target.
pub(crate) fn binomial_crossover<R: Rng + ?Sized>(
    target: &Array1<f64>,
    donor: &Array1<f64>,
    cr: f64,
    rng: &mut R,
) -> Array1<f64> {
    let mut trial = target.clone();
    for j in 0..trial.len() {
        if rng.random::<f64>() < cr {
            trial[j] = donor[j];
        }
    }
    trial
}
