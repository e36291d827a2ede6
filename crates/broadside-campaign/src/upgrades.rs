//! Refit table: seven upgrade lines of three tiers each, bought with salvage
//! parts between waves, each tier scaling its line's tunables by a fixed step.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use broadside_core::config::{EconomyTuning, HelmTuning, TurretTuning};
use broadside_core::constants::UPGRADE_MAX_TIER;
use broadside_core::enums::UpgradeKey;

use crate::economy::ResourceState;

/// Per-tier multiplier step for each upgrade line.
pub fn tier_step(key: UpgradeKey) -> f64 {
    match key {
        UpgradeKey::Engines => 0.10,
        UpgradeKey::Rudder => 0.15,
        UpgradeKey::Hull => 0.25,
        UpgradeKey::FuelTank => 0.25,
        UpgradeKey::Magazine => 0.25,
        UpgradeKey::Gunnery => 0.50,
        UpgradeKey::Traverse => 0.30,
    }
}

/// Parts cost of the next tier from `current_tier`.
/// Returns None if already at max tier.
pub fn upgrade_cost(key: UpgradeKey, current_tier: u32) -> Option<u32> {
    if current_tier >= UPGRADE_MAX_TIER {
        return None;
    }
    let costs = match key {
        UpgradeKey::Engines => [4, 8, 12],
        UpgradeKey::Rudder => [3, 6, 9],
        UpgradeKey::Hull => [5, 10, 15],
        UpgradeKey::FuelTank => [3, 6, 9],
        UpgradeKey::Magazine => [3, 6, 9],
        UpgradeKey::Gunnery => [6, 12, 18],
        UpgradeKey::Traverse => [3, 6, 9],
    };
    costs.get(current_tier as usize).copied()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpgradeError {
    #[error("{} already at max tier", .0.as_str())]
    MaxLevel(UpgradeKey),
    #[error("insufficient parts: have {have}, need {need}")]
    InsufficientParts { have: u32, need: u32 },
    #[error("upgrades can only be fitted between waves")]
    WaveInProgress,
}

/// Purchased tiers per upgrade line. Lines never bought are at tier 0.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    tiers: BTreeMap<UpgradeKey, u32>,
}

impl UpgradeLevels {
    pub fn tier(&self, key: UpgradeKey) -> u32 {
        self.tiers.get(&key).copied().unwrap_or(0)
    }

    /// Named multiplier applied to the tunables this line affects.
    pub fn multiplier(&self, key: UpgradeKey) -> f64 {
        1.0 + self.tier(key) as f64 * tier_step(key)
    }

    pub fn next_cost(&self, key: UpgradeKey) -> Option<u32> {
        upgrade_cost(key, self.tier(key))
    }

    /// Buy the next tier of `key`, paying in parts. Only allowed while the
    /// wave director is paused. Returns the parts spent.
    pub fn purchase(
        &mut self,
        key: UpgradeKey,
        resources: &mut ResourceState,
    ) -> Result<u32, UpgradeError> {
        if resources.wave_active {
            return Err(UpgradeError::WaveInProgress);
        }
        let current = self.tier(key);
        let cost = upgrade_cost(key, current).ok_or(UpgradeError::MaxLevel(key))?;
        if resources.parts < cost {
            return Err(UpgradeError::InsufficientParts {
                have: resources.parts,
                need: cost,
            });
        }
        resources.parts -= cost;
        self.tiers.insert(key, current + 1);
        log::info!("{} upgraded to tier {} for {} parts", key.as_str(), current + 1, cost);
        Ok(cost)
    }

    /// Helm tunables with Engines, Rudder and Hull applied.
    pub fn effective_helm(&self, base: &HelmTuning) -> HelmTuning {
        let engines = self.multiplier(UpgradeKey::Engines);
        let rudder = self.multiplier(UpgradeKey::Rudder);
        HelmTuning {
            max_speed: base.max_speed * engines,
            accel: base.accel * engines,
            reverse_accel: base.reverse_accel * engines,
            turn_rate_low: base.turn_rate_low * rudder,
            turn_rate_high: base.turn_rate_high * rudder,
            nav_turn_rate: base.nav_turn_rate * rudder,
            max_hp: base.max_hp * self.multiplier(UpgradeKey::Hull),
            ..base.clone()
        }
    }

    /// Turret tunables with Gunnery and Traverse applied.
    pub fn effective_turret(&self, base: &TurretTuning) -> TurretTuning {
        TurretTuning {
            damage: base.damage * self.multiplier(UpgradeKey::Gunnery),
            traverse_rate: base.traverse_rate * self.multiplier(UpgradeKey::Traverse),
            ..base.clone()
        }
    }

    /// Ammunition and fuel capacity with Magazine and FuelTank applied.
    pub fn effective_capacity(&self, base: &EconomyTuning) -> (u32, f64) {
        let max_ammo = (base.max_ammo as f64 * self.multiplier(UpgradeKey::Magazine)).round();
        let max_fuel = base.max_fuel * self.multiplier(UpgradeKey::FuelTank);
        (max_ammo as u32, max_fuel)
    }
}
