//! The player vessel.

use serde::{Deserialize, Serialize};

use broadside_core::config::HelmTuning;
use broadside_core::types::{Attitude, Position};

/// Player vessel state. Created once per session and mutated every tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vessel {
    pub position: Position,
    /// Signed forward speed; negative is astern.
    pub speed: f64,
    /// Heading in radians (0 = +z), kept in (-PI, PI].
    pub heading: f64,
    /// Autopilot destination, present only while the autopilot is engaged.
    pub destination: Option<Position>,
    pub hp: f64,
    pub max_hp: f64,
    /// Latest wave-derived placement. Cosmetic; never fed back into motion.
    pub attitude: Attitude,
}

impl Vessel {
    /// A stationary vessel at the origin with a full hull.
    pub fn new(tuning: &HelmTuning) -> Self {
        Self {
            position: Position::default(),
            speed: 0.0,
            heading: 0.0,
            destination: None,
            hp: tuning.max_hp,
            max_hp: tuning.max_hp,
            attitude: Attitude::default(),
        }
    }

    /// Apply incoming damage. Hull points never drop below zero.
    pub fn take_damage(&mut self, amount: f64) {
        self.hp = (self.hp - amount.max(0.0)).max(0.0);
    }

    pub fn is_sunk(&self) -> bool {
        self.hp <= 0.0
    }
}
