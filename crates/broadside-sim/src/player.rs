//! Everything the player owns: hull, guns, stores and refits.
//!
//! Held by the engine outside the ECS world; there is exactly one.

use broadside_campaign::economy::{BoostState, ResourceState};
use broadside_campaign::upgrades::UpgradeLevels;
use broadside_core::config::TuningConfig;
use broadside_helm::vessel::Vessel;

use crate::battery::TurretBattery;

#[derive(Debug, Clone)]
pub struct PlayerShip {
    pub vessel: Vessel,
    pub battery: TurretBattery,
    /// Single source of truth for ammunition, fuel, parts and wave counters.
    pub resources: ResourceState,
    pub upgrades: UpgradeLevels,
    pub boost: BoostState,
}

impl PlayerShip {
    /// A fresh ship with starting stores and no refits.
    pub fn new(tuning: &TuningConfig) -> Self {
        Self {
            vessel: Vessel::new(&tuning.helm),
            battery: TurretBattery::new(&tuning.turret),
            resources: ResourceState::new(&tuning.economy, &tuning.waves),
            upgrades: UpgradeLevels::default(),
            boost: BoostState::default(),
        }
    }
}
