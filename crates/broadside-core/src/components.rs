//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marks an entity as a hostile vessel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Stable identity for a hostile, assigned in spawn order.
/// Used for deterministic tie-breaks and for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Hostile hull and behavior state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileState {
    pub class: HostileClass,
    pub phase: HostilePhase,
    pub hp: f64,
    pub max_hp: f64,
    /// Cleared exactly once, when hull points reach zero.
    pub alive: bool,
    /// Collision radius for projectile hit tests.
    pub hit_radius: f64,
    /// Heading in radians (0 = +z).
    pub heading: f64,
    /// Current forward speed.
    pub speed: f64,
    /// Seconds until the next attack attempt.
    pub attack_cooldown_secs: f64,
    /// Seconds spent in the current phase.
    pub phase_elapsed_secs: f64,
}

/// A shell in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// World velocity on the water plane.
    pub velocity: DVec2,
    pub lifetime_remaining_secs: f64,
    pub range_remaining: f64,
    /// Index of the mount that fired it.
    pub source_mount: usize,
    pub damage: f64,
}

/// A floating salvage crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    /// Ammo rounds, fuel units or parts depending on `kind`.
    pub amount: f64,
    pub lifetime_remaining_secs: f64,
}
