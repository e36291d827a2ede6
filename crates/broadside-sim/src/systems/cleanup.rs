//! Cleanup system: removes sunk or strayed hostiles, spent projectiles and
//! expired pickups.

use hecs::{Entity, World};

use broadside_core::components::{Hostile, HostileState, Pickup, Projectile};
use broadside_core::config::HostileTuning;
use broadside_core::types::Position;

use crate::systems::intercept::is_spent;

/// Despawn everything that is finished. Alive hostiles beyond the despawn
/// radius of the origin (the spawn ring centre) are removed without a death
/// event; the number of such strays is returned so the wave can requeue them.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, tuning: &HostileTuning, despawn_buffer: &mut Vec<Entity>) -> u32 {
    despawn_buffer.clear();
    let mut strays = 0;

    for (entity, (_hostile, pos, state)) in
        world.query_mut::<(&Hostile, &Position, &HostileState)>()
    {
        if !state.alive {
            despawn_buffer.push(entity);
        } else if pos.radius() > tuning.despawn_radius {
            strays += 1;
            despawn_buffer.push(entity);
        }
    }

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if is_spent(projectile) {
            despawn_buffer.push(entity);
        }
    }

    for (entity, pickup) in world.query_mut::<&Pickup>() {
        if pickup.lifetime_remaining_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    strays
}
