use hydrogen_orbitals::angular::angular_at;
use hydrogen_orbitals::figure::{rasterize, Figure};
use hydrogen_orbitals::palette::Palette;
use hydrogen_orbitals::radial::radial;
use hydrogen_orbitals::{sample, QuantumState, Sampler, SamplerConfig};
use nalgebra::DMatrix;
use std::f64::consts::PI;

fn relative_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
}

fn odd_grid() -> Sampler {
    Sampler::new(SamplerConfig {
        extent: 480.0,
        resolution: 81,
    })
}

#[test]
fn default_grid_shape() {
    for state in [QuantumState::s1(), QuantumState::p2_1(), QuantumState::d3_0()] {
        let density = sample(state, 1.0);
        assert_eq!(density.shape(), (680, 680), "{}", state.name());
        assert!(density.iter().all(|&d| d >= 0.0 && d.is_finite()));
    }
}

#[test]
fn ground_state_is_radially_symmetric() {
    let density = sample(QuantumState::s1(), 1.0);
    let n = density.nrows();

    for i in (0..n).step_by(17) {
        for j in (0..n).step_by(13) {
            let d = density[(i, j)];
            assert!(
                relative_eq(d, density[(j, i)], 1e-9),
                "(x,z) vs (z,x) at ({i},{j}): {d} vs {}",
                density[(j, i)]
            );
            assert!(
                relative_eq(d, density[(i, n - 1 - j)], 1e-9),
                "(x,z) vs (-x,z) at ({i},{j}): {d} vs {}",
                density[(i, n - 1 - j)]
            );
        }
    }
}

#[test]
fn radial_at_zero_radius_is_finite() {
    let r = DMatrix::zeros(3, 3);
    for n in 1..=5u32 {
        for l in 0..n {
            let values = radial(n, l, &r, 52.9);
            assert!(values.iter().all(|v| v.is_finite()), "n={n} l={l}");
        }
    }
}

#[test]
fn s_angular_part_is_inverse_sqrt_four_pi() {
    for theta in [-1.5, -0.2, 0.0, 0.7, 1.4] {
        assert!((angular_at(0, 0, theta, 0.0) - 1.0 / (4.0 * PI).sqrt()).abs() < 1e-15);
    }
}

#[test]
fn p_zero_has_nodal_line_on_the_z_axis() {
    // theta = atan(z / x) puts the cos(theta) node at x = 0 (center column)
    let density = odd_grid().density(QuantumState::p2_0(), 1.0);
    let peak = density.max();
    let center = density.ncols() / 2;

    for i in 0..density.nrows() {
        assert!(density[(i, center)] < 1e-20 * peak, "row {i}: {}", density[(i, center)]);
    }
    assert!(peak > 0.0);
}

#[test]
fn excited_s_state_has_a_radial_node() {
    // 2s vanishes at r = 2 a0, i.e. a ring of near-zero density
    let sampler = odd_grid();
    let density = sampler.density(QuantumState::s2(), 1.0);
    let center = density.nrows() / 2;
    let row: Vec<f64> = (center..density.ncols()).map(|j| density[(center, j)]).collect();

    let inner = row[0];
    let min_outside = row[1..].iter().cloned().fold(f64::INFINITY, f64::min);
    assert!(min_outside < 0.01 * inner);
}

#[test]
fn negative_m_matches_positive_m_up_to_a_constant() {
    let sampler = odd_grid();
    let plus = sampler.density(QuantumState { n: 3, l: 1, m: 1 }, 1.0);
    let minus = sampler.density(QuantumState { n: 3, l: 1, m: -1 }, 1.0);

    // ((l - |m|)! / (l + |m|)!)^2 for l = 1
    for (p, m) in plus.iter().zip(minus.iter()) {
        assert!((m - p / 4.0).abs() <= 1e-12 * p.abs().max(1e-300));
    }
}

#[test]
fn larger_scale_spreads_the_orbital() {
    let sampler = odd_grid();
    let tight = sampler.density(QuantumState::s1(), 0.5);
    let wide = sampler.density(QuantumState::s1(), 2.0);
    let c = tight.nrows() / 2;
    let edge = tight.ncols() - 1;

    let tight_ratio = tight[(c, edge)] / tight[(c, c)];
    let wide_ratio = wide[(c, edge)] / wide[(c, c)];
    assert!(wide_ratio > tight_ratio);
}

#[test]
fn density_renders_to_a_square_image() {
    let density = odd_grid().density(QuantumState::d3_0(), 1.0);
    let palette = Palette::by_name("rocket").unwrap();
    let image = rasterize(&density, &palette);
    assert_eq!((image.width, image.height), (81, 81));

    let figure = Figure::new(&density, QuantumState::d3_0(), &palette);
    assert_eq!(figure.annotation, "(3, 2, 0)");
    assert!(figure.image.pixels.contains(&{
        let [r, g, b] = palette.sample(1.0);
        [r, g, b, 255]
    }));
}
