//! Snapshot system: queries the ECS world and the player ship and builds a
//! complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use broadside_campaign::economy::speed_multiplier;
use broadside_core::components::*;
use broadside_core::config::TuningConfig;
use broadside_core::enums::*;
use broadside_core::events::SimEvent;
use broadside_core::state::*;
use broadside_core::types::{Attitude, Position, SimTime};

use crate::player::PlayerShip;
use crate::score::ScoreState;
use crate::world_setup;

/// Build a complete GameStateSnapshot from the current state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    player: &PlayerShip,
    tuning: &TuningConfig,
    events: Vec<SimEvent>,
    score: &ScoreState,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        vessel: build_vessel(player, tuning),
        turrets: player.battery.views(&player.vessel),
        resources: build_resources(player, tuning),
        wave: build_wave(world, player),
        hostiles: build_hostiles(world),
        projectiles: build_projectiles(world),
        pickups: build_pickups(world),
        upgrades: build_upgrades(player),
        events,
        score: score.to_view(time.elapsed_secs),
    }
}

fn build_vessel(player: &PlayerShip, tuning: &TuningConfig) -> VesselView {
    let vessel = &player.vessel;
    let speed_ratio = if tuning.helm.max_speed > 0.0 {
        vessel.speed.abs() / tuning.helm.max_speed
    } else {
        0.0
    };
    VesselView {
        position: vessel.position,
        elevation: vessel.attitude.elevation,
        pitch: vessel.attitude.pitch,
        roll: vessel.attitude.roll,
        heading: vessel.heading,
        speed: vessel.speed,
        speed_ratio,
        hp: vessel.hp,
        max_hp: vessel.max_hp,
        destination: vessel.destination,
        boost_active: player.boost.is_active(),
    }
}

fn build_resources(player: &PlayerShip, tuning: &TuningConfig) -> ResourceView {
    let resources = &player.resources;
    ResourceView {
        ammo: resources.ammo,
        max_ammo: resources.max_ammo,
        fuel: resources.fuel,
        max_fuel: resources.max_fuel,
        parts: resources.parts,
        speed_multiplier: speed_multiplier(resources, &tuning.economy)
            * player.boost.speed_multiplier(&tuning.economy),
        fire_mode: player.battery.fire_mode,
    }
}

fn build_wave(world: &World, player: &PlayerShip) -> WaveView {
    let resources = &player.resources;
    WaveView {
        number: resources.wave,
        phase: resources.phase(),
        remaining_to_spawn: resources.to_spawn,
        alive: world_setup::count_alive(world),
        pause_remaining_secs: if resources.wave_active {
            0.0
        } else {
            resources.pause_timer.max(0.0)
        },
        repairing: resources.repairing,
    }
}

/// Hostile views sorted by unit id.
fn build_hostiles(world: &World) -> Vec<HostileView> {
    let mut hostiles: Vec<HostileView> = world
        .query::<(&Hostile, &UnitId, &Position, &Attitude, &HostileState)>()
        .iter()
        .map(|(_, (_, unit_id, pos, attitude, state))| HostileView {
            unit_id: unit_id.0,
            class: state.class,
            phase: state.phase,
            position: *pos,
            elevation: attitude.elevation,
            pitch: attitude.pitch,
            roll: attitude.roll,
            heading: state.heading,
            hp: state.hp,
            max_hp: state.max_hp,
            alive: state.alive,
        })
        .collect();
    hostiles.sort_by_key(|h| h.unit_id);
    hostiles
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Position, &Projectile)>()
        .iter()
        .map(|(_, (pos, projectile))| ProjectileView {
            position: *pos,
            heading: projectile.velocity.x.atan2(projectile.velocity.y),
        })
        .collect()
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    world
        .query::<(&Position, &Pickup)>()
        .iter()
        .map(|(_, (pos, pickup))| PickupView {
            kind: pickup.kind,
            position: *pos,
        })
        .collect()
}

fn build_upgrades(player: &PlayerShip) -> Vec<UpgradeView> {
    UpgradeKey::ALL
        .iter()
        .map(|&key| UpgradeView {
            key,
            tier: player.upgrades.tier(key),
            next_cost: player.upgrades.next_cost(key),
            multiplier: player.upgrades.multiplier(key),
        })
        .collect()
}
