//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created but not started.
    #[default]
    Standby,
    Active,
    Paused,
    /// Player hull reached zero; the simulation no longer advances.
    Sunk,
}

/// Wave director phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Hostiles still to spawn and/or alive on the field.
    #[default]
    Active,
    /// Breather between waves; repair runs once at its start.
    Pause,
}

/// Hostile behavior phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostilePhase {
    /// Closing on the player.
    #[default]
    Approaching,
    /// Inside attack range, circling and firing.
    Attacking,
    /// Hull points exhausted.
    Destroyed,
}

/// Hostile vessel class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileClass {
    /// Baseline patrol boat.
    #[default]
    Gunboat,
    /// Fast, fragile skirmisher.
    Raider,
    /// Slow, tough, long-range.
    Frigate,
}

/// Turret battery fire mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireMode {
    /// Every eligible mount fires together.
    #[default]
    Salvo,
    /// Mounts take turns, one projectile per fire request.
    Alternating,
}

impl FireMode {
    /// Fire mode selected by a weapon-switch index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Salvo),
            1 => Some(Self::Alternating),
            _ => None,
        }
    }
}

/// Salvage pickup contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Ammo,
    Fuel,
    Parts,
}

/// Purchasable upgrade lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UpgradeKey {
    /// Max speed and acceleration.
    Engines,
    /// Turn rates.
    Rudder,
    /// Max hull points.
    Hull,
    /// Fuel capacity.
    FuelTank,
    /// Ammunition capacity.
    Magazine,
    /// Projectile damage.
    Gunnery,
    /// Turret traverse rate.
    Traverse,
}

impl UpgradeKey {
    pub const ALL: [UpgradeKey; 7] = [
        UpgradeKey::Engines,
        UpgradeKey::Rudder,
        UpgradeKey::Hull,
        UpgradeKey::FuelTank,
        UpgradeKey::Magazine,
        UpgradeKey::Gunnery,
        UpgradeKey::Traverse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engines => "engines",
            Self::Rudder => "rudder",
            Self::Hull => "hull",
            Self::FuelTank => "fuel_tank",
            Self::Magazine => "magazine",
            Self::Gunnery => "gunnery",
            Self::Traverse => "traverse",
        }
    }
}
