//! Salvage system: drops pickups where hostiles sink and collects the ones
//! the player sails over.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use broadside_campaign::economy::{self, ResourceState};
use broadside_core::components::Pickup;
use broadside_core::config::SalvageTuning;
use broadside_core::enums::PickupKind;
use broadside_core::events::SimEvent;
use broadside_core::types::Position;

use crate::systems::hostile_ai::Death;
use crate::world_setup;

/// Roll a drop for every death.
pub fn drop_pickups(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    deaths: &[Death],
    tuning: &SalvageTuning,
    events: &mut Vec<SimEvent>,
) {
    if !tuning.enabled {
        return;
    }
    for death in deaths {
        if !rng.gen_bool(tuning.drop_chance.clamp(0.0, 1.0)) {
            continue;
        }
        let kind = match rng.gen_range(0..3) {
            0 => PickupKind::Ammo,
            1 => PickupKind::Fuel,
            _ => PickupKind::Parts,
        };
        world_setup::spawn_pickup(world, kind, death.position, tuning);
        log::debug!("{kind:?} pickup dropped by hostile {}", death.unit_id.0);
        events.push(SimEvent::PickupDropped {
            kind,
            position: death.position,
        });
    }
}

/// Age pickups and collect any within the pickup radius of `collector`.
/// Collected and expired pickups are left with no lifetime for cleanup.
pub fn collect(
    world: &mut World,
    collector: Position,
    resources: &mut ResourceState,
    tuning: &SalvageTuning,
    dt: f64,
    events: &mut Vec<SimEvent>,
) {
    for (_entity, (pos, pickup)) in world.query_mut::<(&Position, &mut Pickup)>() {
        if pickup.lifetime_remaining_secs <= 0.0 {
            continue;
        }
        if pos.range_to(&collector) <= tuning.pickup_radius {
            match pickup.kind {
                PickupKind::Ammo => economy::add_ammo(resources, pickup.amount as u32),
                PickupKind::Fuel => economy::add_fuel(resources, pickup.amount),
                PickupKind::Parts => economy::add_parts(resources, pickup.amount as u32),
            }
            log::debug!("collected {:?} x{}", pickup.kind, pickup.amount);
            events.push(SimEvent::PickupCollected {
                kind: pickup.kind,
                amount: pickup.amount,
            });
            pickup.lifetime_remaining_secs = 0.0;
        } else {
            pickup.lifetime_remaining_secs -= dt.max(0.0);
        }
    }
}
