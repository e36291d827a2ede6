//! Fundamental geometric and simulation types.
//!
//! The water plane is (x, z); heading 0 points along +z and increases
//! toward +x. Elevation is the vertical axis and is derived, never integrated.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Horizontal position on the water plane (world units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub z: f64,
}

/// Vertical placement and rocking derived from the wave surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    /// Height of the hull origin above the rest plane.
    pub elevation: f64,
    /// Bow-up rotation (radians).
    pub pitch: f64,
    /// Port-up rotation (radians).
    pub roll: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks advanced so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Straight-line distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Bearing to another position in radians, in (-PI, PI].
    pub fn bearing_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        dx.atan2(dz)
    }

    /// Distance from the origin.
    pub fn radius(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    /// Offset along a heading by `distance`.
    pub fn offset(&self, heading: f64, distance: f64) -> Position {
        Position::new(
            self.x + heading.sin() * distance,
            self.z + heading.cos() * distance,
        )
    }

    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.x, self.z)
    }

    pub fn from_vec2(v: DVec2) -> Self {
        Self { x: v.x, z: v.y }
    }
}

impl SimTime {
    /// Advance by one variable-length tick.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Unit vector along a heading.
pub fn heading_vector(heading: f64) -> DVec2 {
    DVec2::new(heading.sin(), heading.cos())
}

/// Normalize an angle to (-PI, PI].
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Rotate `current` toward `target` by at most `max_step` radians.
///
/// Snaps onto `target` only when the remaining difference fits in one step,
/// so a bounded rotation never overshoots.
pub fn rotate_toward(current: f64, target: f64, max_step: f64) -> f64 {
    let diff = normalize_angle(target - current);
    if diff.abs() <= max_step {
        normalize_angle(target)
    } else {
        normalize_angle(current + diff.signum() * max_step)
    }
}
