//! Normalized per-frame control snapshot.
//!
//! Device capture lives outside the simulation; callers translate whatever
//! they read into one of these per tick. One-shot fields (`weapon_switch`,
//! `ability`) are expected to be cleared by the caller once consumed.

use serde::{Deserialize, Serialize};

use crate::types::Position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// World point the turrets should track.
    pub aim_point: Option<Position>,
    /// Fire held or tapped this frame.
    pub fire: bool,
    /// Selects the turret fire mode by index.
    pub weapon_switch: Option<usize>,
    /// Flank-speed boost request.
    pub ability: bool,
}

impl ControlInput {
    /// Whether any manual steering or throttle flag is held.
    pub fn manual_active(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}
