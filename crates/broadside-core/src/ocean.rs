//! Water surface elevation.
//!
//! The simulation only ever asks for the surface height at a point and time;
//! how the surface is drawn is someone else's problem.

/// Pure surface elevation lookup.
pub trait WaveHeightField {
    /// Elevation of the water at (x, z) at time `t` seconds.
    fn height(&self, x: f64, z: f64, t: f64) -> f64;
}

impl<F> WaveHeightField for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn height(&self, x: f64, z: f64, t: f64) -> f64 {
        self(x, z, t)
    }
}

/// Dead calm: elevation is always zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatSea;

impl WaveHeightField for FlatSea {
    fn height(&self, _x: f64, _z: f64, _t: f64) -> f64 {
        0.0
    }
}

/// Sum of sine layers: broad swells, medium chop and small ripples.
///
/// Matches the displacement the ocean surface applies to its vertices, so
/// hulls ride the waves that are actually drawn. `amplitude` scales every
/// layer together; 1.0 is the reference sea state.
#[derive(Debug, Clone, Copy)]
pub struct LayeredSwell {
    pub amplitude: f64,
}

impl Default for LayeredSwell {
    fn default() -> Self {
        Self { amplitude: 1.0 }
    }
}

impl WaveHeightField for LayeredSwell {
    fn height(&self, x: f64, z: f64, t: f64) -> f64 {
        // The surface mesh is laid flat, so its second axis runs along -z.
        let y = -z;
        let swell = (x * 0.3 + t * 0.8).sin() * 1.2 + (y * 0.2 + t * 0.6).sin() * 1.0;
        let chop = (x * 0.8 + y * 0.6 + t * 1.4).sin() * 0.5;
        let ripple = (x * 2.0 + t * 2.0).sin() * 0.15 + (y * 2.5 + t * 1.8).sin() * 0.12;
        (swell + chop + ripple) * self.amplitude
    }
}
