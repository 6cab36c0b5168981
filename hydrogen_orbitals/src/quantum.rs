//! Quantum numbers of a hydrogen orbital

use std::fmt;

/// Largest accepted principal quantum number. With l < n the largest
/// factorial in the wavefunction is (2n - 1)!, which must stay below 170!.
pub const MAX_N: u32 = 85;

/// Quantum numbers for an orbital
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantumState {
    /// Principal quantum number n (1, 2, 3, ...)
    pub n: u32,
    /// Angular momentum quantum number l (0 to n-1)
    pub l: u32,
    /// Magnetic quantum number m (-l to +l)
    pub m: i32,
}

impl QuantumState {
    pub fn new(n: u32, l: u32, m: i32) -> Option<Self> {
        if n == 0 || n > MAX_N || l >= n || m.unsigned_abs() > l {
            None
        } else {
            Some(Self { n, l, m })
        }
    }

    /// Orbital name (1s, 2p+1, 3d-2, etc.)
    pub fn name(&self) -> String {
        const LETTERS: [char; 8] = ['s', 'p', 'd', 'f', 'g', 'h', 'i', 'k'];
        match LETTERS.get(self.l as usize) {
            Some(letter) if self.l == 0 => format!("{}{}", self.n, letter),
            Some(letter) => format!("{}{}{:+}", self.n, letter, self.m),
            None => format!("{}[l={}]{:+}", self.n, self.l, self.m),
        }
    }

    /// Common orbital presets
    pub fn s1() -> Self {
        Self { n: 1, l: 0, m: 0 }
    }

    pub fn s2() -> Self {
        Self { n: 2, l: 0, m: 0 }
    }

    pub fn p2_0() -> Self {
        Self { n: 2, l: 1, m: 0 }
    }

    pub fn p2_1() -> Self {
        Self { n: 2, l: 1, m: 1 }
    }

    pub fn d3_0() -> Self {
        Self { n: 3, l: 2, m: 0 }
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.n, self.l, self.m)
    }
}

/// A validated visualization request: an orbital plus the Bohr-radius scale factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalRequest {
    pub state: QuantumState,
    pub scale: f64,
}
