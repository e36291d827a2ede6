//! Vertical placement and rocking from the wave surface.

use broadside_core::config::HelmTuning;
use broadside_core::ocean::WaveHeightField;
use broadside_core::types::{Attitude, Position};

/// How a hull samples the surface beneath it.
#[derive(Debug, Clone, Copy)]
pub struct HullSampler {
    /// Clearance added to the sampled surface height.
    pub float_offset: f64,
    /// Distance of the four slope samples from the hull origin.
    pub sample_dist: f64,
    /// Scale on the raw slope angles.
    pub damping: f64,
}

impl HullSampler {
    pub fn from_helm(tuning: &HelmTuning) -> Self {
        Self {
            float_offset: tuning.float_offset,
            sample_dist: tuning.attitude_sample_dist,
            damping: tuning.attitude_damping,
        }
    }
}

/// Sample the surface under a hull at `position` facing `heading`.
///
/// Pitch comes from the fore/aft height difference and roll from the
/// port/starboard difference, each over twice the sample distance.
pub fn sample(
    field: &impl WaveHeightField,
    position: Position,
    heading: f64,
    elapsed: f64,
    sampler: &HullSampler,
) -> Attitude {
    let Position { x, z } = position;
    let d = sampler.sample_dist;
    let (sin_h, cos_h) = heading.sin_cos();

    let fore = field.height(x + sin_h * d, z + cos_h * d, elapsed);
    let aft = field.height(x - sin_h * d, z - cos_h * d, elapsed);
    let port = field.height(x + cos_h * d, z - sin_h * d, elapsed);
    let stbd = field.height(x - cos_h * d, z + sin_h * d, elapsed);

    // atan2(0, 0) is 0, so a zero sample distance degrades to a level hull.
    Attitude {
        elevation: field.height(x, z, elapsed) + sampler.float_offset,
        pitch: (fore - aft).atan2(d * 2.0) * sampler.damping,
        roll: (port - stbd).atan2(d * 2.0) * sampler.damping,
    }
}
