//! Wavefunction sampling on the x-z cross-section
//!
//! Builds the coordinate grid, evaluates R_nl(r) Y_l^m(theta, 0) at every
//! grid point and derives the probability density |psi|^2.

use crate::angular::angular;
use crate::grid::{par_map, par_zip_map, CoordinateGrid};
use crate::quantum::QuantumState;
use crate::radial::radial;
use crate::units::effective_bohr_radius;
use nalgebra::{Complex, DMatrix};
use rayon::prelude::*;
use std::time::Instant;

/// Sampled wavefunction, one complex amplitude per grid point
pub type ComplexField = DMatrix<Complex<f64>>;

/// Elementwise |psi|^2 of a [`ComplexField`]
pub type DensityField = DMatrix<f64>;

/// Azimuth of the rendered plane
const PHI: f64 = 0.0;

/// Grid configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    /// Half-width of the square grid in picometers
    pub extent: f64,
    /// Samples per axis
    pub resolution: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            extent: 480.0,
            resolution: 680,
        }
    }
}

/// Evaluates hydrogen wavefunctions on a fresh grid per call
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    pub config: SamplerConfig,
}

impl Sampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Complex wavefunction over the grid.
    ///
    /// Quantum numbers are not checked; invalid ones give NaN output.
    pub fn wavefunction(&self, state: QuantumState, scale: f64) -> ComplexField {
        let start = Instant::now();
        let a0 = effective_bohr_radius(scale);
        let grid = CoordinateGrid::new(self.config.extent, self.config.resolution);
        let polar = grid.polar();

        let radial = radial(state.n, state.l, &polar.r, a0);
        let angular = angular(state.l, state.m, &polar.theta, PHI);
        let psi = par_zip_map(&radial, &angular, |r, y| Complex::new(r * y, 0.0));

        log::debug!(
            "Sampled {} on {}x{} grid (extent {} pm, a0 = {:.3} pm) in {:?}",
            state.name(),
            grid.resolution(),
            grid.resolution(),
            grid.extent(),
            a0,
            start.elapsed()
        );

        psi
    }

    /// Probability density over the grid
    pub fn density(&self, state: QuantumState, scale: f64) -> DensityField {
        probability_density(&self.wavefunction(state, scale))
    }
}

/// Density of `state` on the default 680x680 grid spanning +-480 pm
pub fn sample(state: QuantumState, scale: f64) -> DensityField {
    Sampler::default().density(state, scale)
}

/// |psi|^2 elementwise
pub fn probability_density(psi: &ComplexField) -> DensityField {
    let data: Vec<f64> = psi.as_slice().par_iter().map(|c| c.norm_sqr()).collect();
    DMatrix::from_vec(psi.nrows(), psi.ncols(), data)
}

/// sqrt of a density, the quantity shown on screen
pub fn amplitude(density: &DensityField) -> DMatrix<f64> {
    par_map(density, f64::sqrt)
}
