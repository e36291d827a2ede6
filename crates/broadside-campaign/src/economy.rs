use serde::{Deserialize, Serialize};

use broadside_core::config::{EconomyTuning, WaveTuning};
use broadside_core::enums::WavePhase;

/// Session-wide counters: ammunition, fuel, salvage parts and wave bookkeeping.
///
/// `ammo` stays within `[0, max_ammo]` and `fuel` within `[0, max_fuel]`.
/// `wave_active` and a running `pause_timer` are mutually exclusive phases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    pub ammo: u32,
    pub max_ammo: u32,
    pub fuel: f64,
    pub max_fuel: f64,
    /// Unbounded accumulator; spent on repairs and upgrades.
    pub parts: u32,
    pub wave: u32,
    /// Hostiles of the current wave not yet spawned.
    pub to_spawn: u32,
    pub wave_active: bool,
    pub pause_timer: f64,
    /// Set on entering the pause; cleared by the one-shot repair.
    pub repairing: bool,
}

impl ResourceState {
    /// Starting counters for a new session, with wave 1 queued.
    pub fn new(economy: &EconomyTuning, waves: &WaveTuning) -> Self {
        let max_fuel = economy.max_fuel.max(0.0);
        Self {
            ammo: economy.starting_ammo.min(economy.max_ammo),
            max_ammo: economy.max_ammo,
            fuel: economy.starting_fuel.clamp(0.0, max_fuel),
            max_fuel,
            parts: 0,
            wave: 1,
            to_spawn: waves.base_count,
            wave_active: true,
            pause_timer: 0.0,
            repairing: false,
        }
    }

    pub fn phase(&self) -> WavePhase {
        if self.wave_active {
            WavePhase::Active
        } else {
            WavePhase::Pause
        }
    }

    /// Change capacities, clamping the current counters into the new bounds.
    pub fn set_capacity(&mut self, max_ammo: u32, max_fuel: f64) {
        self.max_ammo = max_ammo;
        self.max_fuel = max_fuel.max(0.0);
        self.ammo = self.ammo.min(self.max_ammo);
        self.fuel = self.fuel.min(self.max_fuel);
    }
}

/// Burn fuel in proportion to `throttle` (0..1, higher while boosting) over
/// `dt` seconds. Fuel never goes negative.
pub fn consume_fuel(state: &mut ResourceState, throttle: f64, dt: f64, tuning: &EconomyTuning) {
    let burn = tuning.fuel_burn_rate * throttle.max(0.0) * dt.max(0.0);
    state.fuel = (state.fuel - burn).max(0.0);
}

/// Top-speed multiplier derived from the fuel ratio.
///
/// 1.0 above the low-fuel threshold, then linear down to the floor, which is
/// returned exactly at zero fuel.
pub fn speed_multiplier(state: &ResourceState, tuning: &EconomyTuning) -> f64 {
    let ratio = if state.max_fuel > 0.0 {
        state.fuel / state.max_fuel
    } else {
        0.0
    };
    if ratio > tuning.low_fuel_threshold {
        return 1.0;
    }
    if ratio <= 0.0 || tuning.low_fuel_threshold <= 0.0 {
        return tuning.low_fuel_speed_floor;
    }
    let floor = tuning.low_fuel_speed_floor;
    floor + (1.0 - floor) * (ratio / tuning.low_fuel_threshold)
}

/// Spend one round. Returns `false` without touching the state when empty.
pub fn spend_ammo(state: &mut ResourceState) -> bool {
    if state.ammo == 0 {
        return false;
    }
    state.ammo -= 1;
    true
}

pub fn add_ammo(state: &mut ResourceState, rounds: u32) {
    state.ammo = state.ammo.saturating_add(rounds).min(state.max_ammo);
}

pub fn add_fuel(state: &mut ResourceState, amount: f64) {
    state.fuel = (state.fuel + amount.max(0.0)).min(state.max_fuel);
}

pub fn add_parts(state: &mut ResourceState, parts: u32) {
    state.parts = state.parts.saturating_add(parts);
}

/// Flank-speed boost timers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoostState {
    pub active_remaining_secs: f64,
    pub cooldown_remaining_secs: f64,
}

impl BoostState {
    pub fn is_active(&self) -> bool {
        self.active_remaining_secs > 0.0
    }

    /// Engage the boost if it is neither running nor cooling down and there
    /// is fuel to burn. Returns whether it engaged.
    pub fn engage(&mut self, resources: &ResourceState, tuning: &EconomyTuning) -> bool {
        if self.is_active() || self.cooldown_remaining_secs > 0.0 || resources.fuel <= 0.0 {
            return false;
        }
        self.active_remaining_secs = tuning.boost_duration_secs;
        true
    }

    /// Run the timers down; the cooldown starts when the boost expires.
    pub fn tick(&mut self, dt: f64, tuning: &EconomyTuning) {
        let dt = dt.max(0.0);
        if self.is_active() {
            self.active_remaining_secs -= dt;
            if self.active_remaining_secs <= 0.0 {
                self.active_remaining_secs = 0.0;
                self.cooldown_remaining_secs = tuning.boost_cooldown_secs;
            }
        } else {
            self.cooldown_remaining_secs = (self.cooldown_remaining_secs - dt).max(0.0);
        }
    }

    pub fn speed_multiplier(&self, tuning: &EconomyTuning) -> f64 {
        if self.is_active() {
            tuning.boost_speed_mult
        } else {
            1.0
        }
    }

    pub fn fuel_factor(&self, tuning: &EconomyTuning) -> f64 {
        if self.is_active() {
            tuning.boost_fuel_factor
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> (ResourceState, EconomyTuning) {
        let economy = EconomyTuning::default();
        (ResourceState::new(&economy, &WaveTuning::default()), economy)
    }

    #[test]
    fn starting_counters() {
        let (state, _) = fresh();
        assert_eq!(state.ammo, 50);
        assert_eq!(state.max_ammo, 80);
        assert_eq!(state.fuel, 100.0);
        assert_eq!(state.parts, 0);
        assert_eq!(state.wave, 1);
        assert_eq!(state.to_spawn, 3);
        assert!(state.wave_active);
        assert_eq!(state.phase(), WavePhase::Active);
    }

    #[test]
    fn fuel_burn_scales_with_throttle() {
        let (mut state, economy) = fresh();
        consume_fuel(&mut state, 1.0, 2.0, &economy);
        assert!((state.fuel - (100.0 - 3.0)).abs() < 1e-9);
        consume_fuel(&mut state, 0.5, 2.0, &economy);
        assert!((state.fuel - (97.0 - 1.5)).abs() < 1e-9);
        consume_fuel(&mut state, 0.0, 10.0, &economy);
        assert!((state.fuel - 95.5).abs() < 1e-9);
    }

    #[test]
    fn fuel_never_negative() {
        let (mut state, economy) = fresh();
        for _ in 0..1000 {
            consume_fuel(&mut state, 2.0, 0.1, &economy);
            assert!(state.fuel >= 0.0);
        }
        assert_eq!(state.fuel, 0.0);
        // Negative inputs never refuel.
        consume_fuel(&mut state, -1.0, 1.0, &economy);
        consume_fuel(&mut state, 1.0, -1.0, &economy);
        assert_eq!(state.fuel, 0.0);
    }

    #[test]
    fn speed_multiplier_curve() {
        let (mut state, economy) = fresh();
        assert_eq!(speed_multiplier(&state, &economy), 1.0);

        state.fuel = 20.0;
        assert!((speed_multiplier(&state, &economy) - 1.0).abs() < 1e-12);

        state.fuel = 10.0;
        let mid = speed_multiplier(&state, &economy);
        assert!((mid - (0.35 + 0.65 * 0.5)).abs() < 1e-12);

        state.fuel = 0.0;
        assert_eq!(speed_multiplier(&state, &economy), 0.35);
    }

    #[test]
    fn spend_ammo_denied_when_empty() {
        let (mut state, _) = fresh();
        assert!(spend_ammo(&mut state));
        assert_eq!(state.ammo, 49);

        state.ammo = 0;
        let before = state.clone();
        assert!(!spend_ammo(&mut state));
        assert_eq!(state, before);
    }

    #[test]
    fn additions_clamp() {
        let (mut state, _) = fresh();
        add_ammo(&mut state, 1000);
        assert_eq!(state.ammo, state.max_ammo);
        add_fuel(&mut state, 1000.0);
        assert_eq!(state.fuel, state.max_fuel);
        add_fuel(&mut state, -50.0);
        assert_eq!(state.fuel, state.max_fuel);
        add_parts(&mut state, u32::MAX);
        add_parts(&mut state, 5);
        assert_eq!(state.parts, u32::MAX);
    }

    #[test]
    fn capacity_change_clamps_counters() {
        let (mut state, _) = fresh();
        state.set_capacity(30, 40.0);
        assert_eq!(state.ammo, 30);
        assert_eq!(state.fuel, 40.0);
        state.set_capacity(100, 125.0);
        assert_eq!(state.ammo, 30);
        assert_eq!(state.max_fuel, 125.0);
    }

    #[test]
    fn boost_runs_then_cools_down() {
        let (state, economy) = fresh();
        let mut boost = BoostState::default();
        assert!(boost.engage(&state, &economy));
        assert!(boost.is_active());
        assert_eq!(boost.speed_multiplier(&economy), 1.25);
        assert_eq!(boost.fuel_factor(&economy), 2.0);
        // Already running.
        assert!(!boost.engage(&state, &economy));

        boost.tick(3.5, &economy);
        assert!(!boost.is_active());
        assert_eq!(boost.cooldown_remaining_secs, 15.0);
        assert!(!boost.engage(&state, &economy));

        boost.tick(15.0, &economy);
        assert!(boost.engage(&state, &economy));
    }

    #[test]
    fn boost_needs_fuel() {
        let (mut state, economy) = fresh();
        state.fuel = 0.0;
        let mut boost = BoostState::default();
        assert!(!boost.engage(&state, &economy));
        assert_eq!(boost.speed_multiplier(&economy), 1.0);
    }
}
