//! Figure composition
//!
//! Turns a [`DensityField`] into an RGBA image plus the decorations the
//! renderer draws around it. Everything here runs on the CPU; the renderer
//! only uploads and lays out the result.

use crate::palette::{Palette, DEFAULT_PALETTE};
use crate::quantum::QuantumState;
use crate::sampler::{amplitude, DensityField};

/// Styling of the figure window, passed to the renderer explicitly
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    pub title: String,
    pub palette: String,
    pub window_width: u32,
    pub window_height: u32,
    pub text_color: [u8; 3],
    pub tick_color: [u8; 3],
    pub title_size: f32,
    pub annotation_size: f32,
    pub label_size: f32,
    pub frame_width: f32,
    pub higher_label: String,
    pub lower_label: String,
    pub show_equations: bool,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            title: "Hydrogen Atom Orbital Visualization".to_string(),
            palette: DEFAULT_PALETTE.to_string(),
            window_width: 1280,
            window_height: 960,
            text_color: [0xdf, 0xdf, 0xdf],
            tick_color: [0xc4, 0xc4, 0xc4],
            title_size: 30.0,
            annotation_size: 28.0,
            label_size: 16.0,
            frame_width: 3.0,
            higher_label: "Higher\nprobability".to_string(),
            lower_label: "Lower\nprobability".to_string(),
            show_equations: true,
        }
    }
}

/// RGBA pixels, row-major from the top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct FigureImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<[u8; 4]>,
}

impl FigureImage {
    pub fn pixel(&self, column: usize, row: usize) -> [u8; 4] {
        self.pixels[row * self.width + column]
    }

    /// Flattened RGBA bytes for texture upload
    pub fn as_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}

/// Everything the renderer needs for one orbital
#[derive(Debug, Clone)]
pub struct Figure {
    pub image: FigureImage,
    /// Colorbar, bottom (low) to top (high)
    pub colorbar: Vec<[u8; 3]>,
    pub background: [u8; 3],
    /// Quantum numbers as `(n, l, m)`
    pub annotation: String,
    pub orbital_name: String,
}

impl Figure {
    pub fn new(density: &DensityField, state: QuantumState, palette: &Palette) -> Self {
        Self {
            image: rasterize(density, palette),
            colorbar: palette.ramp(256),
            background: palette.darkest(),
            annotation: state.to_string(),
            orbital_name: state.name(),
        }
    }
}

/// Color-map sqrt(density), scaled linearly from its minimum to its maximum.
///
/// The density is transposed and flipped vertically: grid x runs from the
/// bottom of the image to the top, grid z from left to right. Non-finite
/// samples get the low end of the palette.
pub fn rasterize(density: &DensityField, palette: &Palette) -> FigureImage {
    let values = amplitude(density);
    let (nz, nx) = values.shape();

    let (lo, hi) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let span = hi - lo;

    let width = nz;
    let height = nx;
    let mut pixels = Vec::with_capacity(width * height);

    for row in 0..height {
        let x_index = nx - 1 - row;
        for column in 0..width {
            let v = values[(column, x_index)];
            let t = if v.is_finite() && span > 0.0 { (v - lo) / span } else { 0.0 };
            let [r, g, b] = palette.sample(t);
            pixels.push([r, g, b, 255]);
        }
    }

    FigureImage {
        width,
        height,
        pixels,
    }
}
