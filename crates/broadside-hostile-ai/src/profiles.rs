//! Class-specific behavioral profiles.
//!
//! Consolidates per-class parameters for the hostile FSM and the spawner.

use broadside_core::constants::*;
use broadside_core::enums::HostileClass;

/// Behavioral profile for a hostile class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostileProfile {
    /// Starting hit points.
    pub max_hp: f64,
    /// Radius used by projectile hit tests.
    pub hit_radius: f64,
    /// Cruise speed (units/s).
    pub speed: f64,
    /// Maximum heading change (rad/s).
    pub turn_rate: f64,
    /// Range at which the unit switches from pursuit to attack.
    pub attack_range: f64,
    /// Hull damage dealt by a landed attack.
    pub attack_damage: f64,
    /// Seconds between attack attempts.
    pub attack_interval_secs: f64,
    /// Probability that an attack attempt lands.
    pub accuracy: f64,
}

impl HostileProfile {
    /// Preferred distance while circling in the attack phase.
    pub fn standoff(&self) -> f64 {
        self.attack_range * 0.7
    }
}

/// Get the behavioral profile for a given class.
pub fn get_profile(class: HostileClass) -> HostileProfile {
    match class {
        HostileClass::Gunboat => HostileProfile {
            max_hp: GUNBOAT_HP,
            hit_radius: GUNBOAT_HIT_RADIUS,
            speed: GUNBOAT_SPEED,
            turn_rate: GUNBOAT_TURN_RATE,
            attack_range: GUNBOAT_ATTACK_RANGE,
            attack_damage: GUNBOAT_ATTACK_DAMAGE,
            attack_interval_secs: GUNBOAT_ATTACK_INTERVAL_SECS,
            accuracy: GUNBOAT_ACCURACY,
        },
        HostileClass::Raider => HostileProfile {
            max_hp: RAIDER_HP,
            hit_radius: RAIDER_HIT_RADIUS,
            speed: RAIDER_SPEED,
            turn_rate: RAIDER_TURN_RATE,
            attack_range: RAIDER_ATTACK_RANGE,
            attack_damage: RAIDER_ATTACK_DAMAGE,
            attack_interval_secs: RAIDER_ATTACK_INTERVAL_SECS,
            accuracy: RAIDER_ACCURACY,
        },
        HostileClass::Frigate => HostileProfile {
            max_hp: FRIGATE_HP,
            hit_radius: FRIGATE_HIT_RADIUS,
            speed: FRIGATE_SPEED,
            turn_rate: FRIGATE_TURN_RATE,
            attack_range: FRIGATE_ATTACK_RANGE,
            attack_damage: FRIGATE_ATTACK_DAMAGE,
            attack_interval_secs: FRIGATE_ATTACK_INTERVAL_SECS,
            accuracy: FRIGATE_ACCURACY,
        },
    }
}

/// Class of the `spawn_index`-th hostile (0-based) of `wave`.
///
/// Early waves are all gunboats. Raiders take every third slot from
/// `RAIDER_FIRST_WAVE`, frigates every fifth slot from `FRIGATE_FIRST_WAVE`
/// (frigates win a shared slot).
pub fn class_for_spawn(wave: u32, spawn_index: u32) -> HostileClass {
    if wave >= FRIGATE_FIRST_WAVE && spawn_index % 5 == 4 {
        HostileClass::Frigate
    } else if wave >= RAIDER_FIRST_WAVE && spawn_index % 3 == 2 {
        HostileClass::Raider
    } else {
        HostileClass::Gunboat
    }
}
