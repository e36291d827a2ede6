//! Wave spawning system: releases the current wave's hostiles onto the
//! field on a configurable cadence.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use broadside_campaign::economy::ResourceState;
use broadside_campaign::waves::take_spawns;
use broadside_core::components::UnitId;
use broadside_core::config::{HostileTuning, WaveTuning};
use broadside_core::events::SimEvent;
use broadside_hostile_ai::profiles::class_for_spawn;

use crate::world_setup;

/// Spawn cadence within a wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPolicy {
    /// Seconds between batches.
    pub interval_secs: f64,
    /// Hostiles per batch.
    pub batch_size: u32,
    /// Spawning waits while this many hostiles are alive.
    pub max_alive: u32,
}

impl From<&WaveTuning> for SpawnPolicy {
    fn from(tuning: &WaveTuning) -> Self {
        Self {
            interval_secs: tuning.spawn_interval_secs,
            batch_size: tuning.spawn_batch_size,
            max_alive: tuning.max_alive,
        }
    }
}

/// Per-wave spawn bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct SpawnClock {
    /// Wave the clock was last reset for.
    wave: u32,
    /// Seconds until the next batch; the first batch of a wave is immediate.
    timer_secs: f64,
    spawned_in_wave: u32,
}

/// Release due hostiles. Does nothing outside an active wave.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    resources: &mut ResourceState,
    clock: &mut SpawnClock,
    policy: &SpawnPolicy,
    tuning: &HostileTuning,
    next_unit_id: &mut u32,
    events: &mut Vec<SimEvent>,
    dt: f64,
) {
    if !resources.wave_active {
        return;
    }
    if clock.wave != resources.wave {
        *clock = SpawnClock {
            wave: resources.wave,
            timer_secs: 0.0,
            spawned_in_wave: 0,
        };
    }

    clock.timer_secs -= dt.max(0.0);
    if clock.timer_secs > 0.0 || resources.to_spawn == 0 {
        return;
    }

    let alive = world_setup::count_alive(world);
    let room = policy.max_alive.saturating_sub(alive);
    let count = take_spawns(resources, policy.batch_size.min(room));
    if count == 0 {
        // At the cap: retry as soon as a slot frees up.
        clock.timer_secs = 0.0;
        return;
    }

    for _ in 0..count {
        let class = class_for_spawn(resources.wave, clock.spawned_in_wave);
        let unit_id = UnitId(*next_unit_id);
        *next_unit_id += 1;
        clock.spawned_in_wave += 1;

        let (_, position) = world_setup::spawn_hostile(world, rng, class, unit_id, tuning);
        log::debug!(
            "spawned hostile {} ({:?}) at ({:.1}, {:.1})",
            unit_id.0,
            class,
            position.x,
            position.z
        );
        events.push(SimEvent::HostileSpawned {
            unit_id: unit_id.0,
            class,
            position,
        });
    }
    clock.timer_secs = policy.interval_secs;
}
