//! Multimodal test functions
//!
//! These functions have multiple local minima and are used to test the global
//! search capabilities and exploration of optimization algorithms.

use ndarray::Array1;
use std::f64::consts::{E, PI};

/// Ackley function - nearly flat outer region, many local minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq = x.iter().map(|&xi| xi.powi(2)).sum::<f64>();
    let sum_cos = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum::<f64>();
    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
}

const WEIERSTRASS_A: f64 = 0.5;
const WEIERSTRASS_B: f64 = 3.0;
const WEIERSTRASS_K_MAX: usize = 20;

fn weierstrass_term(t: f64) -> f64 {
    (0..=WEIERSTRASS_K_MAX)
        .map(|k| {
            let k = k as f64;
            WEIERSTRASS_A * k * (2.0 * PI * WEIERSTRASS_B * k * t).cos()
        })
        .sum()
}

/// Weierstrass function with linear weights `a * k` (a = 0.5, b = 3, k = 0..=20)
/// f(x) = sum_i w(x_i + 0.5) - D * w(0.5), with w(t) = sum_k a k cos(2 pi b k t)
/// f(0) = 0; the linear weights make other points lower, so there is no
/// tabulated global minimum.
/// Bounds: x_i in [-0.5, 0.5]
pub fn weierstrass(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum: f64 = x.iter().map(|&xi| weierstrass_term(xi + 0.5)).sum();
    sum - n * weierstrass_term(0.5)
}

/// Griewank function - multimodal, challenging for large dimensions
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank(x: &Array1<f64>) -> f64 {
    let sum_squares: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let product_cos: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum_squares / 4000.0 - product_cos + 1.0
}

/// Rastrigin function - regular grid of local minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    10.0 * n + x.iter().map(|&xi| xi.powi(2) - 10.0 * (2.0 * PI * xi).cos()).sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_zero_at_origin() {
        for d in [1, 2, 10] {
            let x = Array1::zeros(d);
            assert!(ackley(&x).abs() < 1e-12);
            assert!(weierstrass(&x).abs() < 1e-9);
            assert!(griewank(&x).abs() < 1e-12);
            assert!(rastrigin(&x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rastrigin_integer_points() {
        // cos(2 pi k) = 1 on integers, leaving the quadratic term
        assert!((rastrigin(&array![1.0, -2.0]) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_weierstrass_is_periodic() {
        // every cosine has an integer frequency 3k, so shifting by 1 is a no-op
        let a = weierstrass(&array![0.2, -0.1]);
        let b = weierstrass(&array![1.2, -1.1]);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_griewank_positive_away_from_origin() {
        assert!(griewank(&array![10.0, -7.0, 3.0]) > 0.0);
        assert!(ackley(&array![1.0, 1.0]) > 0.0);
    }
}
