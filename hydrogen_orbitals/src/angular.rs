//! Angular part of the hydrogen wavefunction
//!
//! The complex spherical harmonic is projected onto the real axis: the
//! azimuthal factor e^(i m phi) contributes only cos(m phi).

use crate::grid::par_map;
use crate::special::{associated_legendre, factorial, parity_sign, MAX_FACTORIAL};
use nalgebra::DMatrix;
use std::f64::consts::PI;

/// (-1)^m sqrt( (2l+1) (l-|m|)! / (4 pi (l+|m|)!) )
///
/// NaN when |m| > l or when (l+|m|)! is not finite.
pub fn angular_normalization(l: u32, m: i32) -> f64 {
    let m_abs = m.unsigned_abs();
    let Some(diff) = l.checked_sub(m_abs) else {
        return f64::NAN;
    };
    if l.saturating_add(m_abs) > MAX_FACTORIAL {
        return f64::NAN;
    }
    let l_f = f64::from(l);
    let ratio = factorial(diff) / factorial(l + m_abs);
    parity_sign(m) * ((2.0 * l_f + 1.0) * ratio / (4.0 * PI)).sqrt()
}

/// Real projection of Y_l^m at a single (theta, phi)
pub fn angular_at(l: u32, m: i32, theta: f64, phi: f64) -> f64 {
    angular_with_norm(l, m, theta, phi, angular_normalization(l, m))
}

/// Real projection of Y_l^m over a matrix of polar angles at a fixed azimuth
pub fn angular(l: u32, m: i32, theta: &DMatrix<f64>, phi: f64) -> DMatrix<f64> {
    let norm = angular_normalization(l, m);
    par_map(theta, |theta| angular_with_norm(l, m, theta, phi, norm))
}

fn angular_with_norm(l: u32, m: i32, theta: f64, phi: f64, norm: f64) -> f64 {
    let legendre = associated_legendre(l, m, theta.cos());
    norm * legendre * (f64::from(m) * phi).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s_orbital_is_constant() {
        let expected = 1.0 / (4.0 * PI).sqrt();
        for i in -10..=10 {
            let theta = i as f64 * 0.37;
            assert!((angular_at(0, 0, theta, 0.0) - expected).abs() < 1e-15);
        }
    }

    #[test]
    fn p_zero_follows_cos_theta() {
        // Y_1^0 = sqrt(3 / 4pi) cos(theta)
        let c = (3.0 / (4.0 * PI)).sqrt();
        for i in 0..16 {
            let theta = i as f64 * 0.2;
            assert!((angular_at(1, 0, theta, 0.0) - c * theta.cos()).abs() < 1e-14);
        }
    }

    #[test]
    fn double_phase_cancels_for_positive_order() {
        // (-1)^m from the normalization cancels the Condon-Shortley phase of P_l^m
        let theta = 0.8;
        let value = angular_at(1, 1, theta, 0.0);
        let expected = (3.0 / (8.0 * PI)).sqrt() * theta.sin();
        assert!((value - expected).abs() < 1e-14);
    }

    #[test]
    fn azimuth_enters_as_cosine() {
        let theta = 1.1;
        let at_zero = angular_at(2, 2, theta, 0.0);
        let at_phi = angular_at(2, 2, theta, 0.3);
        assert!((at_phi - at_zero * (0.6f64).cos()).abs() < 1e-14);
    }

    #[test]
    fn real_and_finite_on_grid_angles() {
        let theta = DMatrix::from_fn(5, 5, |i, j| -1.5 + 0.15 * (i * 5 + j) as f64);
        for l in 0..5u32 {
            for m in -(l as i32)..=(l as i32) {
                let values = angular(l, m, &theta, 0.0);
                assert!(values.iter().all(|v| v.is_finite()), "l={l} m={m}");
            }
        }
    }

    #[test]
    fn invalid_order_is_nan() {
        assert!(angular_at(1, 2, 0.5, 0.0).is_nan());
    }

    #[test]
    fn huge_degree_is_nan_without_overflow() {
        assert!(angular_normalization(u32::MAX, i32::MAX).is_nan());
        assert!(angular_normalization(84, -84).is_finite());
    }
}
