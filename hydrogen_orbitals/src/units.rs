//! Physical constants and the working length unit.
//!
//! Base unit for lengths on the sampling grid: picometer (pm).

/// Bohr radius in meters (CODATA 2018).
pub const BOHR_RADIUS_M: f64 = 5.291_772_109_03e-11;

/// Picometers per meter.
pub const PICOMETERS_PER_METER: f64 = 1.0e12;

/// Bohr radius in picometers, about 52.9 pm.
pub const BOHR_RADIUS_PM: f64 = BOHR_RADIUS_M * PICOMETERS_PER_METER;

/// Bohr radius used by the wavefunction, in picometers.
///
/// `scale` is dimensionless; `1.0` gives the physical radius.
pub fn effective_bohr_radius(scale: f64) -> f64 {
    scale * BOHR_RADIUS_PM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_radius_in_picometers() {
        assert!((effective_bohr_radius(1.0) - 52.917_721_090_3).abs() < 1e-9);
    }

    #[test]
    fn scale_is_linear() {
        let a = effective_bohr_radius(2.5);
        assert!((a - 2.5 * BOHR_RADIUS_PM).abs() < 1e-12);
    }
}
