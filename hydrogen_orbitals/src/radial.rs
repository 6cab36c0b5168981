//! Radial part of the hydrogen wavefunction, R_nl(r)

use crate::grid::par_map;
use crate::special::{factorial, laguerre, MAX_FACTORIAL};
use nalgebra::DMatrix;

/// Normalization constant of R_nl for Bohr radius `a0`:
/// sqrt( (2/(n a0))^3 (n-l-1)! / (2n (n+l)!) ).
///
/// NaN when l >= n or when (n+l)! is not finite.
pub fn radial_normalization(n: u32, l: u32, a0: f64) -> f64 {
    if l >= n || n.saturating_add(l) > MAX_FACTORIAL {
        return f64::NAN;
    }
    let n_f = f64::from(n);
    let cube = (2.0 / (n_f * a0)).powi(3);
    (cube * factorial(n - l - 1) / (2.0 * n_f * factorial(n + l))).sqrt()
}

/// R_nl at a single radius
pub fn radial_at(n: u32, l: u32, r: f64, a0: f64) -> f64 {
    radial_with_norm(n, l, r, a0, radial_normalization(n, l, a0))
}

/// R_nl over a matrix of radii (same shape as `r`)
pub fn radial(n: u32, l: u32, r: &DMatrix<f64>, a0: f64) -> DMatrix<f64> {
    let norm = radial_normalization(n, l, a0);
    par_map(r, |r| radial_with_norm(n, l, r, a0, norm))
}

fn radial_with_norm(n: u32, l: u32, r: f64, a0: f64, norm: f64) -> f64 {
    let p = 2.0 * r / (f64::from(n) * a0);
    let degree = n.saturating_sub(l + 1);
    let alpha = 2.0 * f64::from(l) + 1.0;

    // powi(0) is 1 even at p = 0
    norm * (-p / 2.0).exp() * p.powi(l as i32) * laguerre(degree, alpha, p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_state_is_pure_exponential() {
        let a0 = 1.0;
        for i in 0..20 {
            let r = i as f64 * 0.4;
            let expected = 2.0 * (-r).exp();
            assert!((radial_at(1, 0, r, a0) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn matches_textbook_2p() {
        // R_21 = (1 / (2 sqrt 6)) a0^{-3/2} (r/a0) e^{-r/(2 a0)}
        let a0 = 1.0;
        for i in 1..20 {
            let r = i as f64 * 0.5;
            let expected = r * (-r / 2.0).exp() / (2.0 * 6f64.sqrt());
            assert!((radial_at(2, 1, r, a0) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn finite_at_origin() {
        for n in 1..=6 {
            for l in 0..n {
                let value = radial_at(n, l, 0.0, 52.9);
                assert!(value.is_finite(), "R_{n}{l}(0) = {value}");
                if l > 0 {
                    assert_eq!(value, 0.0);
                } else {
                    assert!(value > 0.0);
                }
            }
        }
    }

    #[test]
    fn normalized_over_radius() {
        // integral of R^2 r^2 dr over [0, 60 a0] by the trapezoid rule
        let a0 = 2.0;
        let steps = 20_000;
        let r_max = 60.0 * a0;
        let dr = r_max / steps as f64;

        for (n, l) in [(1, 0), (2, 0), (2, 1), (3, 1), (4, 3)] {
            let integral: f64 = (0..=steps)
                .map(|i| {
                    let r = i as f64 * dr;
                    let w = if i == 0 || i == steps { 0.5 } else { 1.0 };
                    w * (radial_at(n, l, r, a0) * r).powi(2) * dr
                })
                .sum();
            assert!(
                (integral - 1.0).abs() < 1e-4,
                "n={n} l={l}: integral R^2 r^2 dr = {integral} (expect 1)"
            );
        }
    }

    #[test]
    fn matrix_form_matches_scalar() {
        let r = DMatrix::from_fn(4, 4, |i, j| (i + 2 * j) as f64 * 7.5);
        let values = radial(3, 1, &r, 52.9);
        for (v, &ri) in values.iter().zip(r.iter()) {
            assert_eq!(*v, radial_at(3, 1, ri, 52.9));
        }
    }

    #[test]
    fn invalid_numbers_are_nan() {
        assert!(radial_at(2, 2, 1.0, 1.0).is_nan());
    }

    #[test]
    fn huge_numbers_are_nan_without_overflow() {
        assert!(radial_normalization(4_000_000_000, 300_000_000, 52.9).is_nan());
        assert!(radial_normalization(u32::MAX, u32::MAX - 1, 52.9).is_nan());
        assert!(radial_normalization(85, 84, 52.9).is_finite());
    }
}
