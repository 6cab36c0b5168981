//! Special functions for the separable hydrogen solution
//!
//! Factorials, generalized Laguerre polynomials and associated Legendre
//! functions, all evaluated by three-term recurrences in `f64`.

/// Largest n with a finite n! in `f64`
pub const MAX_FACTORIAL: u32 = 170;

/// n! as a float. Exact up to 22!, infinite above [`MAX_FACTORIAL`].
pub fn factorial(n: u32) -> f64 {
    if n > MAX_FACTORIAL {
        return f64::INFINITY;
    }
    (1..=n).map(f64::from).product()
}

/// (-1)^m for any integer m
pub fn parity_sign(m: i32) -> f64 {
    if m % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Generalized Laguerre polynomial L_k^(alpha)(x).
///
/// Standard normalization, L_0 = 1 and L_1 = 1 + alpha - x, advanced with
/// (k+1) L_{k+1} = (2k + 1 + alpha - x) L_k - (k + alpha) L_{k-1}.
pub fn laguerre(degree: u32, alpha: f64, x: f64) -> f64 {
    if degree == 0 {
        return 1.0;
    }

    let mut prev = 1.0;
    let mut curr = 1.0 + alpha - x;

    for k in 1..degree {
        let k = f64::from(k);
        let next = ((2.0 * k + 1.0 + alpha - x) * curr - (k + alpha) * prev) / (k + 1.0);
        prev = curr;
        curr = next;
    }

    curr
}

/// Associated Legendre function P_l^m(x) for |x| <= 1, Condon-Shortley phase included.
///
/// Negative orders use P_l^{-m} = (-1)^m (l-m)!/(l+m)! P_l^m. Orders with
/// |m| > l vanish identically.
pub fn associated_legendre(l: u32, m: i32, x: f64) -> f64 {
    let m_abs = m.unsigned_abs();
    if m_abs > l {
        return 0.0;
    }

    // P_|m|^|m| = (-1)^|m| (2|m| - 1)!! (1 - x^2)^(|m|/2)
    let mut pmm = 1.0;
    if m_abs > 0 {
        let somx2 = ((1.0 - x) * (1.0 + x)).max(0.0).sqrt();
        let mut odd = 1.0;
        for _ in 0..m_abs {
            pmm *= -odd * somx2;
            odd += 2.0;
        }
    }

    let value = if l == m_abs {
        pmm
    } else {
        let mf = f64::from(m_abs);
        let mut pmmp1 = x * (2.0 * mf + 1.0) * pmm;
        for ll in (m_abs + 2)..=l {
            let llf = f64::from(ll);
            let pll = (x * (2.0 * llf - 1.0) * pmmp1 - (llf + mf - 1.0) * pmm) / (llf - mf);
            pmm = pmmp1;
            pmmp1 = pll;
        }
        pmmp1
    };

    if m >= 0 {
        value
    } else {
        parity_sign(m) * factorial(l - m_abs) / factorial(l.saturating_add(m_abs)) * value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn factorial_small_values() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(5), 120.0);
        assert_eq!(factorial(10), 3_628_800.0);
    }

    #[test]
    fn factorial_overflows_to_infinity() {
        assert!(factorial(MAX_FACTORIAL).is_finite());
        assert_eq!(factorial(MAX_FACTORIAL + 1), f64::INFINITY);
        assert_eq!(factorial(u32::MAX), f64::INFINITY);
    }

    #[test]
    fn parity_of_negative_orders() {
        assert_eq!(parity_sign(0), 1.0);
        assert_eq!(parity_sign(-1), -1.0);
        assert_eq!(parity_sign(-2), 1.0);
        assert_eq!(parity_sign(3), -1.0);
    }

    #[test]
    fn laguerre_matches_closed_forms() {
        for &alpha in &[0.0, 1.0, 3.0, 5.0] {
            for i in 0..20 {
                let x = i as f64 * 0.75;
                assert!(close(laguerre(0, alpha, x), 1.0));
                assert!(close(laguerre(1, alpha, x), 1.0 + alpha - x));

                let l2 = 0.5 * x * x - (alpha + 2.0) * x + 0.5 * (alpha + 2.0) * (alpha + 1.0);
                assert!(
                    close(laguerre(2, alpha, x), l2),
                    "L_2^{alpha}({x}) = {} (expect {l2})",
                    laguerre(2, alpha, x)
                );
            }
        }
    }

    #[test]
    fn laguerre_degree_three() {
        // L_3^1(x) = -x^3/6 + 2x^2 - 6x + 4
        for i in 0..10 {
            let x = i as f64 * 0.5;
            let expected = -x.powi(3) / 6.0 + 2.0 * x * x - 6.0 * x + 4.0;
            assert!(close(laguerre(3, 1.0, x), expected));
        }
    }

    #[test]
    fn legendre_matches_closed_forms() {
        for i in 0..=20 {
            let x = -1.0 + i as f64 * 0.1;
            let s = (1.0 - x * x).sqrt();

            assert!(close(associated_legendre(0, 0, x), 1.0));
            assert!(close(associated_legendre(1, 0, x), x));
            assert!(close(associated_legendre(1, 1, x), -s));
            assert!(close(associated_legendre(2, 0, x), 0.5 * (3.0 * x * x - 1.0)));
            assert!(close(associated_legendre(2, 1, x), -3.0 * x * s));
            assert!(close(associated_legendre(2, 2, x), 3.0 * s * s));
            assert!(close(associated_legendre(3, 3, x), -15.0 * s * s * s));
        }
    }

    #[test]
    fn legendre_negative_order() {
        let x: f64 = 0.3;
        let s = (1.0 - x * x).sqrt();
        // P_1^{-1} = s / 2, P_2^{-2} = s^2 / 8
        assert!(close(associated_legendre(1, -1, x), 0.5 * s));
        assert!(close(associated_legendre(2, -2, x), s * s / 8.0));
    }

    #[test]
    fn legendre_vanishes_above_degree() {
        assert_eq!(associated_legendre(1, 2, 0.5), 0.0);
        assert_eq!(associated_legendre(2, -3, 0.5), 0.0);
    }
}
