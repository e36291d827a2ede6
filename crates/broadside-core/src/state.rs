//! Game state snapshot: the complete visible state handed to presentation
//! after each tick. Read-only by construction: it is a copy.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub vessel: VesselView,
    pub turrets: Vec<TurretView>,
    pub resources: ResourceView,
    pub wave: WaveView,
    pub hostiles: Vec<HostileView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
    pub upgrades: Vec<UpgradeView>,
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

/// Player vessel pose and hull.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VesselView {
    pub position: Position,
    pub elevation: f64,
    pub pitch: f64,
    pub roll: f64,
    /// Heading (radians, 0 = +z).
    pub heading: f64,
    /// Signed forward speed.
    pub speed: f64,
    /// |speed| over base max speed, for a throttle gauge.
    pub speed_ratio: f64,
    pub hp: f64,
    pub max_hp: f64,
    pub destination: Option<Position>,
    pub boost_active: bool,
}

/// One turret mount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurretView {
    pub position: Position,
    /// Barrel bearing in world space (radians).
    pub world_aim: f64,
    /// Barrel angle relative to the keel (radians).
    pub local_aim: f64,
}

/// Economy counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceView {
    pub ammo: u32,
    pub max_ammo: u32,
    pub fuel: f64,
    pub max_fuel: f64,
    pub parts: u32,
    pub speed_multiplier: f64,
    pub fire_mode: FireMode,
}

/// Wave director status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub number: u32,
    pub phase: WavePhase,
    pub remaining_to_spawn: u32,
    pub alive: u32,
    pub pause_remaining_secs: f64,
    pub repairing: bool,
}

/// A hostile vessel for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub unit_id: u32,
    pub class: HostileClass,
    pub phase: HostilePhase,
    pub position: Position,
    pub elevation: f64,
    pub pitch: f64,
    pub roll: f64,
    pub heading: f64,
    pub hp: f64,
    pub max_hp: f64,
    pub alive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub heading: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub kind: PickupKind,
    pub position: Position,
}

/// Upgrade shop line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeView {
    pub key: UpgradeKey,
    pub tier: u32,
    /// None when the line is at its top tier.
    pub next_cost: Option<u32>,
    pub multiplier: f64,
}

/// Running tallies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub kills: u32,
    pub shots_fired: u32,
    pub hits: u32,
    pub damage_taken: f64,
    pub waves_cleared: u32,
    pub session_time_secs: f64,
}
