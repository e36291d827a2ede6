//! Events emitted by the simulation for presentation and pickup spawning.
//!
//! Events are returned in each tick's snapshot; nothing in the core calls
//! back into presentation code.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A fire request succeeded.
    ShotFired { projectiles: u32 },
    /// A projectile struck a hostile.
    Hit {
        unit_id: u32,
        damage: f64,
        position: Position,
    },
    /// A hostile entered the field.
    HostileSpawned {
        unit_id: u32,
        class: HostileClass,
        position: Position,
    },
    /// A hostile's hull reached zero. Emitted exactly once per unit.
    HostileDestroyed {
        unit_id: u32,
        class: HostileClass,
        position: Position,
    },
    /// A hostile attack landed on the player.
    PlayerHit { unit_id: u32, damage: f64, hp: f64 },
    /// The autopilot reached its destination.
    DestinationReached,
    WaveCleared { wave: u32 },
    WaveStarted { wave: u32, hostiles: u32 },
    /// Between-wave repair consumed parts.
    Repaired { hp_restored: f64, parts_used: u32 },
    PickupDropped { kind: PickupKind, position: Position },
    PickupCollected { kind: PickupKind, amount: f64 },
    UpgradePurchased { key: UpgradeKey, tier: u32, cost: u32 },
    /// Player hull reached zero.
    Sunk,
}
