//! Entity spawn factories for the simulation world.
//!
//! Creates hostile, projectile and pickup entities with the appropriate
//! component bundles.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use broadside_core::components::*;
use broadside_core::config::{HostileTuning, SalvageTuning, TurretTuning};
use broadside_core::enums::*;
use broadside_core::types::{normalize_angle, Attitude, Position};
use broadside_hostile_ai::profiles::get_profile;

/// Spawn a hostile on the ring around the origin at a random bearing and
/// radius, facing a random direction.
pub fn spawn_hostile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    class: HostileClass,
    unit_id: UnitId,
    tuning: &HostileTuning,
) -> (hecs::Entity, Position) {
    let bearing: f64 = rng.gen_range(0.0..TAU);
    let radius: f64 = if tuning.spawn_ring_max > tuning.spawn_ring_min {
        rng.gen_range(tuning.spawn_ring_min..tuning.spawn_ring_max)
    } else {
        tuning.spawn_ring_min
    };
    let facing: f64 = rng.gen_range(0.0..TAU);

    let position = Position::default().offset(bearing, radius);
    let entity = spawn_hostile_at(world, class, unit_id, position, normalize_angle(facing));
    (entity, position)
}

/// Spawn a hostile at a fixed position and heading.
pub fn spawn_hostile_at(
    world: &mut World,
    class: HostileClass,
    unit_id: UnitId,
    position: Position,
    heading: f64,
) -> hecs::Entity {
    let profile = get_profile(class);
    let state = HostileState {
        class,
        phase: HostilePhase::Approaching,
        hp: profile.max_hp,
        max_hp: profile.max_hp,
        alive: true,
        hit_radius: profile.hit_radius,
        heading,
        speed: profile.speed,
        attack_cooldown_secs: profile.attack_interval_secs,
        phase_elapsed_secs: 0.0,
    };
    world.spawn((Hostile, unit_id, position, Attitude::default(), state))
}

/// Spawn a projectile leaving `origin` with `velocity`.
pub fn spawn_projectile(
    world: &mut World,
    origin: Position,
    velocity: DVec2,
    source_mount: usize,
    tuning: &TurretTuning,
) -> hecs::Entity {
    world.spawn((
        origin,
        Projectile {
            velocity,
            lifetime_remaining_secs: tuning.projectile_lifetime_secs,
            range_remaining: tuning.projectile_max_range,
            source_mount,
            damage: tuning.damage,
        },
    ))
}

/// Spawn a salvage crate at `position`.
pub fn spawn_pickup(
    world: &mut World,
    kind: PickupKind,
    position: Position,
    tuning: &SalvageTuning,
) -> hecs::Entity {
    let amount = match kind {
        PickupKind::Ammo => tuning.ammo_amount as f64,
        PickupKind::Fuel => tuning.fuel_amount,
        PickupKind::Parts => tuning.parts_amount as f64,
    };
    world.spawn((
        position,
        Pickup {
            kind,
            amount,
            lifetime_remaining_secs: tuning.lifetime_secs,
        },
    ))
}

/// Number of hostiles still alive on the field.
pub fn count_alive(world: &World) -> u32 {
    world
        .query::<(&Hostile, &HostileState)>()
        .iter()
        .filter(|(_, (_, state))| state.alive)
        .count() as u32
}
