//! Cross-section sampling grid
//!
//! The grid lies in the x-z plane. Matrices follow meshgrid ("xy") order:
//! row `i` selects z, column `j` selects x.

use nalgebra::{DMatrix, Scalar};
use rayon::prelude::*;

/// Square grid of (x, z) sample points spanning `[-extent, extent]` on both axes
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGrid {
    extent: f64,
    resolution: usize,
    axis: Vec<f64>,
}

/// Polar form of every grid point
#[derive(Debug, Clone)]
pub struct PolarGrid {
    /// Distance from the nucleus
    pub r: DMatrix<f64>,
    /// Polar angle, `atan(z / (x + eps))`
    pub theta: DMatrix<f64>,
}

impl CoordinateGrid {
    pub fn new(extent: f64, resolution: usize) -> Self {
        Self {
            extent,
            resolution,
            axis: linspace(-extent, extent, resolution),
        }
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Sample positions along either axis
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// Full (x, z) meshgrid
    pub fn meshgrid(&self) -> (DMatrix<f64>, DMatrix<f64>) {
        let n = self.resolution;
        let x = DMatrix::from_fn(n, n, |_, j| self.axis[j]);
        let z = DMatrix::from_fn(n, n, |i, _| self.axis[i]);
        (x, z)
    }

    /// Convert every grid point to (r, theta).
    ///
    /// `f64::EPSILON` is added to x so the x = 0 column never divides by zero.
    /// phi is not stored: the plane is the phi = 0 cross-section.
    pub fn polar(&self) -> PolarGrid {
        let (x, z) = self.meshgrid();
        PolarGrid {
            r: par_zip_map(&x, &z, |x, z| (x * x + z * z).sqrt()),
            theta: par_zip_map(&x, &z, |x, z| (z / (x + f64::EPSILON)).atan()),
        }
    }
}

/// `count` evenly spaced values from `start` to `stop` inclusive
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { stop } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// Apply `f` to every element in parallel, keeping the shape
pub fn par_map<T, F>(m: &DMatrix<f64>, f: F) -> DMatrix<T>
where
    T: Scalar + Send,
    F: Fn(f64) -> T + Sync + Send,
{
    let data: Vec<T> = m.as_slice().par_iter().map(|&v| f(v)).collect();
    DMatrix::from_vec(m.nrows(), m.ncols(), data)
}

/// Combine two equally shaped matrices elementwise in parallel
pub fn par_zip_map<A, B, T, F>(a: &DMatrix<A>, b: &DMatrix<B>, f: F) -> DMatrix<T>
where
    A: Scalar + Copy + Sync,
    B: Scalar + Copy + Sync,
    T: Scalar + Send,
    F: Fn(A, B) -> T + Sync + Send,
{
    assert_eq!(a.shape(), b.shape(), "elementwise operands must share a shape");
    let data: Vec<T> = a
        .as_slice()
        .par_iter()
        .zip(b.as_slice().par_iter())
        .map(|(&x, &y)| f(x, y))
        .collect();
    DMatrix::from_vec(a.nrows(), a.ncols(), data)
}
