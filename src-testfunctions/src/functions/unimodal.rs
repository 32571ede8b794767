//! Unimodal benchmark objectives
//!
//! Each takes a vector of any dimension D >= 1.

use ndarray::Array1;

/// High-conditioned elliptic, in the scaled-sphere form used by the experiment
/// f(x) = sum(100 * x_i^2)
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn high_conditioned_elliptic(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| 100.0 * xi * xi).sum()
}

/// Bent Cigar function - ill-conditioned, unimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn bent_cigar(x: &Array1<f64>) -> f64 {
    x[0].powi(2) + 1e6 * x.iter().skip(1).map(|&xi| xi.powi(2)).sum::<f64>()
}

/// Discus function - one sensitive direction
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn discus(x: &Array1<f64>) -> f64 {
    1e6 * x[0].powi(2) + x.iter().skip(1).map(|&xi| xi.powi(2)).sum::<f64>()
}

/// Rosenbrock function - narrow curved valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1); identically 0 for D = 1
/// Bounds: x_i in [-5, 10]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| 100.0 * (w[1] - w[0].powi(2)).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_zero_at_origin() {
        let x = Array1::zeros(5);
        assert_eq!(high_conditioned_elliptic(&x), 0.0);
        assert_eq!(bent_cigar(&x), 0.0);
        assert_eq!(discus(&x), 0.0);
    }

    #[test]
    fn test_conditioning() {
        let x = array![1.0, 1.0, 1.0];
        assert_eq!(high_conditioned_elliptic(&x), 300.0);
        assert_eq!(bent_cigar(&x), 1.0 + 2e6);
        assert_eq!(discus(&x), 1e6 + 2.0);
    }

    #[test]
    fn test_rosenbrock() {
        assert_eq!(rosenbrock(&array![1.0, 1.0, 1.0, 1.0]), 0.0);
        assert_eq!(rosenbrock(&array![0.0, 0.0]), 1.0);
        assert_eq!(rosenbrock(&array![3.0]), 0.0);
    }
}
