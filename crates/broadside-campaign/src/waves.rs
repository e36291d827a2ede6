//! Wave lifecycle: active combat, inter-wave pause and the one-shot repair.

use broadside_core::config::WaveTuning;

use crate::economy::ResourceState;

/// Number of hostiles in `wave` (1-based).
pub fn wave_count(wave: u32, tuning: &WaveTuning) -> u32 {
    tuning
        .base_count
        .saturating_add(tuning.increment.saturating_mul(wave.saturating_sub(1)))
}

/// Reserve up to `batch` hostiles from the current wave's spawn budget.
/// Returns how many may be spawned now; zero outside an active wave.
pub fn take_spawns(state: &mut ResourceState, batch: u32) -> u32 {
    if !state.wave_active {
        return 0;
    }
    let taken = batch.min(state.to_spawn);
    state.to_spawn -= taken;
    taken
}

/// Return `count` hostiles that left the field without being sunk to the
/// current wave's spawn budget, so a wave only ends by kills. Ignored outside
/// an active wave.
pub fn requeue_spawns(state: &mut ResourceState, count: u32) {
    if state.wave_active {
        state.to_spawn = state.to_spawn.saturating_add(count);
    }
}

/// Advance the wave state machine by `dt` seconds.
///
/// * Active → Pause once nothing is left to spawn and nothing is alive; the
///   pause timer is set and the repair flag raised.
/// * During the pause the repair runs exactly once: when parts are available
///   and the hull is damaged, up to `parts * repair_per_part` points are
///   restored and the parts actually needed are consumed. The flag clears
///   whether or not anything was healed.
/// * Pause → Active when the timer runs out: the wave number advances and
///   the spawn budget is refilled.
///
/// Returns the repaired hull value when a repair happened this call.
pub fn update_wave(
    state: &mut ResourceState,
    alive: u32,
    hp: f64,
    max_hp: f64,
    dt: f64,
    tuning: &WaveTuning,
    repair_per_part: f64,
) -> Option<f64> {
    if state.wave_active {
        if state.to_spawn == 0 && alive == 0 {
            state.wave_active = false;
            state.pause_timer = tuning.pause_duration_secs;
            state.repairing = true;
            log::info!("wave {} cleared", state.wave);
        }
        return None;
    }

    state.pause_timer -= dt.max(0.0);

    let mut repaired = None;
    if state.repairing {
        state.repairing = false;
        repaired = repair(state, hp, max_hp, repair_per_part);
    }

    if state.pause_timer <= 0.0 {
        state.wave = state.wave.saturating_add(1);
        state.to_spawn = wave_count(state.wave, tuning);
        state.wave_active = true;
        state.pause_timer = 0.0;
        state.repairing = false;
        log::info!("wave {} begins with {} hostiles", state.wave, state.to_spawn);
    }

    repaired
}

fn repair(state: &mut ResourceState, hp: f64, max_hp: f64, repair_per_part: f64) -> Option<f64> {
    if state.parts == 0 || hp >= max_hp || repair_per_part <= 0.0 {
        return None;
    }
    let need = max_hp - hp;
    let restored = need.min(state.parts as f64 * repair_per_part);
    let used = ((restored / repair_per_part).ceil() as u32).min(state.parts);
    state.parts -= used;
    log::info!("repaired {restored:.1} hull using {used} parts");
    Some(hp + restored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside_core::config::EconomyTuning;
    use broadside_core::enums::WavePhase;

    fn fresh() -> (ResourceState, WaveTuning) {
        let waves = WaveTuning::default();
        (ResourceState::new(&EconomyTuning::default(), &waves), waves)
    }

    #[test]
    fn wave_count_formula() {
        let waves = WaveTuning::default();
        assert_eq!(wave_count(1, &waves), 3);
        assert_eq!(wave_count(2, &waves), 5);
        assert_eq!(wave_count(5, &waves), 11);
        assert_eq!(wave_count(0, &waves), 3);
    }

    #[test]
    fn take_spawns_respects_budget() {
        let (mut state, _) = fresh();
        assert_eq!(take_spawns(&mut state, 2), 2);
        assert_eq!(take_spawns(&mut state, 2), 1);
        assert_eq!(take_spawns(&mut state, 2), 0);
        assert_eq!(state.to_spawn, 0);
    }

    #[test]
    fn no_spawns_during_pause() {
        let (mut state, _) = fresh();
        state.wave_active = false;
        assert_eq!(take_spawns(&mut state, 5), 0);
        assert_eq!(state.to_spawn, 3);
    }

    #[test]
    fn requeued_strays_keep_wave_open() {
        let (mut state, waves) = fresh();
        state.to_spawn = 0;
        requeue_spawns(&mut state, 2);
        assert_eq!(state.to_spawn, 2);
        assert_eq!(update_wave(&mut state, 0, 100.0, 100.0, 0.1, &waves, 2.0), None);
        assert!(state.wave_active);

        state.wave_active = false;
        requeue_spawns(&mut state, 4);
        assert_eq!(state.to_spawn, 2);
    }

    #[test]
    fn stays_active_while_hostiles_remain() {
        let (mut state, waves) = fresh();
        state.to_spawn = 0;
        assert_eq!(update_wave(&mut state, 1, 100.0, 100.0, 0.1, &waves, 2.0), None);
        assert!(state.wave_active);

        state.to_spawn = 1;
        assert_eq!(update_wave(&mut state, 0, 100.0, 100.0, 0.1, &waves, 2.0), None);
        assert!(state.wave_active);
    }

    #[test]
    fn clear_enters_pause() {
        let (mut state, waves) = fresh();
        state.to_spawn = 0;
        let result = update_wave(&mut state, 0, 100.0, 100.0, 0.016, &waves, 2.0);
        assert_eq!(result, None);
        assert!(!state.wave_active);
        assert_eq!(state.phase(), WavePhase::Pause);
        assert_eq!(state.pause_timer, 4.0);
        assert!(state.repairing);
    }

    #[test]
    fn pause_advances_to_next_wave() {
        let (mut state, waves) = fresh();
        state.to_spawn = 0;
        update_wave(&mut state, 0, 100.0, 100.0, 0.0, &waves, 2.0);

        let mut ticks = 0;
        while !state.wave_active {
            update_wave(&mut state, 0, 100.0, 100.0, 0.5, &waves, 2.0);
            ticks += 1;
            assert!(ticks <= 8);
        }
        assert_eq!(ticks, 8);
        assert_eq!(state.wave, 2);
        assert_eq!(state.to_spawn, 5);
        assert!(!state.repairing);
    }

    #[test]
    fn repair_consumes_needed_parts_once() {
        let (mut state, waves) = fresh();
        state.parts = 3;
        state.to_spawn = 0;
        update_wave(&mut state, 0, 95.0, 100.0, 0.016, &waves, 2.0);

        let repaired = update_wave(&mut state, 0, 95.0, 100.0, 0.016, &waves, 2.0);
        assert_eq!(repaired, Some(100.0));
        assert_eq!(state.parts, 0);
        assert!(!state.repairing);

        // One-shot: a second pause tick heals nothing.
        state.parts = 3;
        let again = update_wave(&mut state, 0, 95.0, 100.0, 0.016, &waves, 2.0);
        assert_eq!(again, None);
        assert_eq!(state.parts, 3);
    }

    #[test]
    fn partial_repair_limited_by_parts() {
        let (mut state, waves) = fresh();
        state.parts = 2;
        state.to_spawn = 0;
        update_wave(&mut state, 0, 50.0, 100.0, 0.0, &waves, 2.0);
        let repaired = update_wave(&mut state, 0, 50.0, 100.0, 0.1, &waves, 2.0);
        assert_eq!(repaired, Some(54.0));
        assert_eq!(state.parts, 0);
    }

    #[test]
    fn repair_flag_clears_without_parts() {
        let (mut state, waves) = fresh();
        state.to_spawn = 0;
        update_wave(&mut state, 0, 10.0, 100.0, 0.0, &waves, 2.0);
        assert!(state.repairing);
        assert_eq!(update_wave(&mut state, 0, 10.0, 100.0, 0.1, &waves, 2.0), None);
        assert!(!state.repairing);
    }

    #[test]
    fn repair_at_full_hull_keeps_parts() {
        let (mut state, waves) = fresh();
        state.parts = 4;
        state.to_spawn = 0;
        update_wave(&mut state, 0, 100.0, 100.0, 0.0, &waves, 2.0);
        assert_eq!(update_wave(&mut state, 0, 100.0, 100.0, 0.1, &waves, 2.0), None);
        assert_eq!(state.parts, 4);
    }

    #[test]
    fn long_dt_repairs_and_advances_in_one_call() {
        let (mut state, waves) = fresh();
        state.parts = 1;
        state.to_spawn = 0;
        update_wave(&mut state, 0, 90.0, 100.0, 0.0, &waves, 2.0);
        let repaired = update_wave(&mut state, 0, 90.0, 100.0, 10.0, &waves, 2.0);
        assert_eq!(repaired, Some(92.0));
        assert!(state.wave_active);
        assert_eq!(state.wave, 2);
    }
}
