//! Common utilities for the visualizers
//!
//! Shared window and GPU surface setup, so that each visualizer only has to
//! describe what it draws.

pub mod graphics;

pub use graphics::*;
