//! Hostile AI system: applies hits, runs the behavior FSM, moves hostiles
//! over the wave surface and resolves their attacks on the player.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use broadside_core::components::{Hostile, HostileState, UnitId};
use broadside_core::config::HostileTuning;
use broadside_core::enums::{HostileClass, HostilePhase};
use broadside_core::events::SimEvent;
use broadside_core::ocean::WaveHeightField;
use broadside_core::types::{heading_vector, Attitude, Position};
use broadside_helm::attitude::{self, HullSampler};
use broadside_helm::vessel::Vessel;
use broadside_hostile_ai::fsm::{evaluate, HostileContext};
use broadside_hostile_ai::profiles::get_profile;

use crate::score::ScoreState;
use crate::systems::intercept::HitEvent;

/// A hostile whose hull reached zero this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Death {
    pub unit_id: UnitId,
    pub class: HostileClass,
    /// Last world position.
    pub position: Position,
}

/// Apply projectile hits. A unit whose hull reaches zero is marked dead and
/// reported exactly once; hits on an already dead unit are ignored.
pub fn apply_hits(
    world: &mut World,
    hits: &[HitEvent],
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
) -> Vec<Death> {
    let mut deaths = Vec::new();
    for hit in hits {
        let Ok((position, state)) =
            world.query_one_mut::<(&Position, &mut HostileState)>(hit.target)
        else {
            continue;
        };
        if !state.alive {
            continue;
        }

        state.hp = (state.hp - hit.damage).max(0.0);
        score.hits += 1;
        events.push(SimEvent::Hit {
            unit_id: hit.unit_id.0,
            damage: hit.damage,
            position: hit.position,
        });

        if state.hp <= 0.0 {
            state.alive = false;
            state.phase = HostilePhase::Destroyed;
            state.speed = 0.0;
            score.kills += 1;
            log::debug!("hostile {} ({:?}) destroyed", hit.unit_id.0, state.class);
            events.push(SimEvent::HostileDestroyed {
                unit_id: hit.unit_id.0,
                class: state.class,
                position: *position,
            });
            deaths.push(Death {
                unit_id: hit.unit_id,
                class: state.class,
                position: *position,
            });
        }
    }
    deaths
}

/// Run pursuit and attack for every alive hostile, in unit id order.
///
/// Movement integrates the FSM's heading and speed; placement and rocking
/// are sampled from `field` exactly as for the player. Landed attacks
/// damage `vessel` directly.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    vessel: &mut Vessel,
    field: &impl WaveHeightField,
    dt: f64,
    elapsed: f64,
    tuning: &HostileTuning,
    sampler: &HullSampler,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
) {
    let dt = dt.max(0.0);
    let mut order: Vec<(UnitId, Entity)> = world
        .query::<(&Hostile, &UnitId, &HostileState)>()
        .iter()
        .filter(|(_, (_, _, state))| state.alive)
        .map(|(entity, (_, unit_id, _))| (*unit_id, entity))
        .collect();
    order.sort_by_key(|(unit_id, _)| *unit_id);

    for (unit_id, entity) in order {
        let Ok((position, attitude_out, state)) =
            world.query_one_mut::<(&mut Position, &mut Attitude, &mut HostileState)>(entity)
        else {
            continue;
        };

        let ctx = HostileContext {
            class: state.class,
            phase: state.phase,
            position: *position,
            heading: state.heading,
            target: vessel.position,
            range_to_target: position.range_to(&vessel.position),
            attack_cooldown_secs: state.attack_cooldown_secs,
            disengage_factor: tuning.disengage_factor,
            dt,
        };
        let update = evaluate(&ctx);

        if update.phase_changed {
            state.phase_elapsed_secs = 0.0;
        } else {
            state.phase_elapsed_secs += dt;
        }
        state.phase = update.new_phase;
        state.heading = update.heading;
        state.speed = update.speed;
        state.attack_cooldown_secs = update.attack_cooldown_secs;

        let step = heading_vector(state.heading) * (state.speed * dt);
        *position = Position::new(position.x + step.x, position.z + step.y);
        *attitude_out = attitude::sample(field, *position, state.heading, elapsed, sampler);

        if update.attack {
            let profile = get_profile(state.class);
            if rng.gen_bool(profile.accuracy.clamp(0.0, 1.0)) {
                vessel.take_damage(profile.attack_damage);
                score.damage_taken += profile.attack_damage;
                events.push(SimEvent::PlayerHit {
                    unit_id: unit_id.0,
                    damage: profile.attack_damage,
                    hp: vessel.hp,
                });
            }
        }
    }
}
