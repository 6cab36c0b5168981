//! Hydrogen Orbital Cross-Sections
//!
//! Evaluates hydrogen-atom wavefunctions from their quantum numbers (n, l, m)
//! on a 2D slice through the nucleus and displays the probability density as
//! a color-mapped image:
//!
//! - **Radial part**: generalized Laguerre polynomials with exponential decay ([`radial`])
//! - **Angular part**: associated Legendre functions, real azimuthal projection ([`angular`])
//! - **Sampling**: x-z grid, polar conversion, |ψ|² ([`sampler`])
//! - **Console input**: validated quantum numbers and Bohr-radius scale ([`input`])
//! - **Display**: palette mapping and an egui figure window ([`figure`], [`renderer`])

pub mod special;
pub mod units;
pub mod quantum;
pub mod grid;
pub mod radial;
pub mod angular;
pub mod sampler;
pub mod input;
pub mod palette;
pub mod figure;
pub mod renderer;
pub mod equations_ui;

pub use quantum::{OrbitalRequest, QuantumState};
pub use sampler::{probability_density, sample, ComplexField, DensityField, Sampler, SamplerConfig};
