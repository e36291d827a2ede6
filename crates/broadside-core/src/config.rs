//! Runtime tuning loaded from a TOML file.
//!
//! [`TuningConfig`] mirrors the constants in [`crate::constants`]. Every
//! section and field is `#[serde(default)]`, so a file only needs to name the
//! values it overrides; everything else keeps the compiled default.
//!
//! ```toml
//! [helm]
//! max_speed = 34.0
//!
//! [waves]
//! pause_duration_secs = 6.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// All tunables consumed by the simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    pub helm: HelmTuning,
    pub turret: TurretTuning,
    pub hostiles: HostileTuning,
    pub economy: EconomyTuning,
    pub waves: WaveTuning,
    pub salvage: SalvageTuning,
}

/// Player vessel handling and autopilot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelmTuning {
    pub max_speed: f64,
    pub accel: f64,
    pub reverse_accel: f64,
    pub drag: f64,
    pub turn_rate_low: f64,
    pub turn_rate_high: f64,
    pub turn_ramp_speed: f64,
    pub turn_ramp_floor: f64,
    pub reverse_fraction: f64,
    pub float_offset: f64,
    pub attitude_sample_dist: f64,
    pub attitude_damping: f64,
    pub max_hp: f64,
    pub nav_arrive_radius: f64,
    pub nav_slow_radius: f64,
    pub nav_turn_rate: f64,
    pub nav_arrival_decay: f64,
    pub nav_align_tolerance: f64,
}

impl Default for HelmTuning {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPEED,
            accel: ACCEL,
            reverse_accel: REVERSE_ACCEL,
            drag: DRAG,
            turn_rate_low: TURN_RATE_LOW,
            turn_rate_high: TURN_RATE_HIGH,
            turn_ramp_speed: TURN_RAMP_SPEED,
            turn_ramp_floor: TURN_RAMP_FLOOR,
            reverse_fraction: REVERSE_SPEED_FRACTION,
            float_offset: FLOAT_OFFSET,
            attitude_sample_dist: ATTITUDE_SAMPLE_DIST,
            attitude_damping: ATTITUDE_DAMPING,
            max_hp: PLAYER_MAX_HP,
            nav_arrive_radius: NAV_ARRIVE_RADIUS,
            nav_slow_radius: NAV_SLOW_RADIUS,
            nav_turn_rate: NAV_TURN_RATE,
            nav_arrival_decay: NAV_ARRIVAL_DECAY,
            nav_align_tolerance: NAV_ALIGN_TOLERANCE,
        }
    }
}

/// Turret battery and projectile ballistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurretTuning {
    pub traverse_rate: f64,
    pub muzzle_velocity: f64,
    pub projectile_lifetime_secs: f64,
    pub projectile_max_range: f64,
    pub damage: f64,
    pub reload_secs: f64,
    pub fire_arc: f64,
    /// Mount offsets as (lateral toward port, fore along the keel).
    pub mounts: Vec<[f64; 2]>,
}

impl Default for TurretTuning {
    fn default() -> Self {
        Self {
            traverse_rate: TURRET_TRAVERSE_RATE,
            muzzle_velocity: MUZZLE_VELOCITY,
            projectile_lifetime_secs: PROJECTILE_LIFETIME_SECS,
            projectile_max_range: PROJECTILE_MAX_RANGE,
            damage: PROJECTILE_DAMAGE,
            reload_secs: RELOAD_SECS,
            fire_arc: FIRE_ARC,
            mounts: vec![FORWARD_MOUNT_OFFSET, AFT_MOUNT_OFFSET],
        }
    }
}

/// Hostile placement and field policy. Per-class stats live in the
/// hostile AI profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostileTuning {
    pub spawn_ring_min: f64,
    pub spawn_ring_max: f64,
    pub despawn_radius: f64,
    pub float_offset: f64,
    pub disengage_factor: f64,
}

impl Default for HostileTuning {
    fn default() -> Self {
        Self {
            spawn_ring_min: SPAWN_RING_MIN,
            spawn_ring_max: SPAWN_RING_MAX,
            despawn_radius: HOSTILE_DESPAWN_RADIUS,
            float_offset: HOSTILE_FLOAT_OFFSET,
            disengage_factor: ATTACK_DISENGAGE_FACTOR,
        }
    }
}

/// Ammunition, fuel, repair and boost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyTuning {
    pub starting_ammo: u32,
    pub max_ammo: u32,
    pub starting_fuel: f64,
    pub max_fuel: f64,
    pub fuel_burn_rate: f64,
    pub low_fuel_speed_floor: f64,
    pub low_fuel_threshold: f64,
    pub repair_per_part: f64,
    pub boost_speed_mult: f64,
    pub boost_duration_secs: f64,
    pub boost_cooldown_secs: f64,
    pub boost_fuel_factor: f64,
}

impl Default for EconomyTuning {
    fn default() -> Self {
        Self {
            starting_ammo: STARTING_AMMO,
            max_ammo: MAX_AMMO,
            starting_fuel: STARTING_FUEL,
            max_fuel: MAX_FUEL,
            fuel_burn_rate: FUEL_BURN_RATE,
            low_fuel_speed_floor: LOW_FUEL_SPEED_MULT,
            low_fuel_threshold: LOW_FUEL_THRESHOLD,
            repair_per_part: REPAIR_PER_PART,
            boost_speed_mult: BOOST_SPEED_MULT,
            boost_duration_secs: BOOST_DURATION_SECS,
            boost_cooldown_secs: BOOST_COOLDOWN_SECS,
            boost_fuel_factor: BOOST_FUEL_FACTOR,
        }
    }
}

/// Wave sizing and spawn cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveTuning {
    pub base_count: u32,
    pub increment: u32,
    pub pause_duration_secs: f64,
    pub spawn_interval_secs: f64,
    pub spawn_batch_size: u32,
    pub max_alive: u32,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            base_count: WAVE_ENEMY_COUNT_BASE,
            increment: WAVE_ENEMY_INCREMENT,
            pause_duration_secs: WAVE_PAUSE_DURATION_SECS,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            spawn_batch_size: SPAWN_BATCH_SIZE,
            max_alive: MAX_ALIVE_HOSTILES,
        }
    }
}

/// Pickups dropped by destroyed hostiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalvageTuning {
    pub enabled: bool,
    pub drop_chance: f64,
    pub pickup_radius: f64,
    pub lifetime_secs: f64,
    pub ammo_amount: u32,
    pub fuel_amount: f64,
    pub parts_amount: u32,
}

impl Default for SalvageTuning {
    fn default() -> Self {
        Self {
            enabled: true,
            drop_chance: PICKUP_DROP_CHANCE,
            pickup_radius: PICKUP_RADIUS,
            lifetime_secs: PICKUP_LIFETIME_SECS,
            ammo_amount: PICKUP_AMMO_AMOUNT,
            fuel_amount: PICKUP_FUEL_AMOUNT,
            parts_amount: PICKUP_PARTS_AMOUNT,
        }
    }
}

impl TuningConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: TuningConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML tuning file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject values that would stall or destabilize the integration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("helm.max_speed", self.helm.max_speed)?;
        positive("helm.accel", self.helm.accel)?;
        positive("helm.reverse_accel", self.helm.reverse_accel)?;
        positive("helm.drag", self.helm.drag)?;
        positive("helm.turn_ramp_speed", self.helm.turn_ramp_speed)?;
        positive("helm.attitude_sample_dist", self.helm.attitude_sample_dist)?;
        positive("helm.max_hp", self.helm.max_hp)?;
        positive("helm.nav_arrive_radius", self.helm.nav_arrive_radius)?;
        positive("helm.nav_slow_radius", self.helm.nav_slow_radius)?;
        positive("helm.nav_turn_rate", self.helm.nav_turn_rate)?;
        unit_interval("helm.reverse_fraction", self.helm.reverse_fraction)?;
        unit_interval("helm.turn_ramp_floor", self.helm.turn_ramp_floor)?;

        positive("turret.traverse_rate", self.turret.traverse_rate)?;
        positive("turret.muzzle_velocity", self.turret.muzzle_velocity)?;
        positive(
            "turret.projectile_lifetime_secs",
            self.turret.projectile_lifetime_secs,
        )?;
        positive("turret.projectile_max_range", self.turret.projectile_max_range)?;
        if self.turret.mounts.len() < 2 {
            return Err(ConfigError::Invalid {
                field: "turret.mounts",
                reason: format!("need at least 2 mounts, got {}", self.turret.mounts.len()),
            });
        }

        if self.hostiles.spawn_ring_min > self.hostiles.spawn_ring_max {
            return Err(ConfigError::Invalid {
                field: "hostiles.spawn_ring_min",
                reason: format!(
                    "{} exceeds spawn_ring_max {}",
                    self.hostiles.spawn_ring_min, self.hostiles.spawn_ring_max
                ),
            });
        }
        positive("hostiles.despawn_radius", self.hostiles.despawn_radius)?;

        positive("economy.max_fuel", self.economy.max_fuel)?;
        positive("economy.repair_per_part", self.economy.repair_per_part)?;
        positive("economy.low_fuel_threshold", self.economy.low_fuel_threshold)?;
        unit_interval("economy.low_fuel_speed_floor", self.economy.low_fuel_speed_floor)?;

        positive("waves.spawn_interval_secs", self.waves.spawn_interval_secs)?;
        if self.waves.spawn_batch_size == 0 {
            return Err(ConfigError::Invalid {
                field: "waves.spawn_batch_size",
                reason: "must be at least 1".into(),
            });
        }
        if self.waves.max_alive == 0 {
            return Err(ConfigError::Invalid {
                field: "waves.max_alive",
                reason: "must be at least 1".into(),
            });
        }

        unit_interval("salvage.drop_chance", self.salvage.drop_chance)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a positive finite number, got {value}"),
        })
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a value in [0, 1], got {value}"),
        })
    }
}
