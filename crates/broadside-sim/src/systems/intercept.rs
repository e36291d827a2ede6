//! Projectile flight and hit resolution.

use glam::DVec2;
use hecs::{Entity, World};

use broadside_core::components::{Hostile, HostileState, Projectile, UnitId};
use broadside_core::types::Position;

/// A projectile struck a hostile. Damage is applied by the hostile AI system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEvent {
    pub target: Entity,
    pub unit_id: UnitId,
    pub damage: f64,
    /// Projectile position at impact.
    pub position: Position,
}

struct Candidate {
    entity: Entity,
    unit_id: UnitId,
    center: DVec2,
    hit_radius: f64,
}

/// Distance from `point` to the segment `a`..`b`. A zero-length segment
/// degrades to point distance.
pub fn segment_distance(a: DVec2, b: DVec2, point: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return a.distance(point);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (a + ab * t).distance(point)
}

/// Advance every live projectile by `dt` and resolve hits.
///
/// Each projectile sweeps the segment it covers this tick. Of the alive
/// hostiles within their hit radius of that segment, the nearest wins, ties
/// going to the lowest unit id, so the result never depends on iteration
/// order. A projectile that hits or runs out of lifetime or range is marked
/// spent for cleanup and never resolves again.
pub fn run(world: &mut World, dt: f64) -> Vec<HitEvent> {
    let dt = dt.max(0.0);
    let candidates: Vec<Candidate> = world
        .query::<(&Hostile, &UnitId, &Position, &HostileState)>()
        .iter()
        .filter(|(_, (_, _, _, state))| state.alive)
        .map(|(entity, (_, unit_id, pos, state))| Candidate {
            entity,
            unit_id: *unit_id,
            center: pos.to_vec2(),
            hit_radius: state.hit_radius,
        })
        .collect();

    let mut hits = Vec::new();
    for (_entity, (pos, projectile)) in world.query_mut::<(&mut Position, &mut Projectile)>() {
        if is_spent(projectile) {
            continue;
        }
        let start = pos.to_vec2();
        let end = start + projectile.velocity * dt;

        let struck = candidates
            .iter()
            .map(|c| (c, segment_distance(start, end, c.center)))
            .filter(|(c, distance)| *distance <= c.hit_radius)
            .min_by(|(a, da), (b, db)| da.total_cmp(db).then(a.unit_id.cmp(&b.unit_id)));

        match struck {
            Some((target, _)) => {
                hits.push(HitEvent {
                    target: target.entity,
                    unit_id: target.unit_id,
                    damage: projectile.damage,
                    position: *pos,
                });
                projectile.lifetime_remaining_secs = 0.0;
            }
            None => {
                *pos = Position::from_vec2(end);
                projectile.lifetime_remaining_secs -= dt;
                projectile.range_remaining -= projectile.velocity.length() * dt;
            }
        }
    }
    hits
}

/// Out of lifetime or range; awaiting cleanup.
pub fn is_spent(projectile: &Projectile) -> bool {
    projectile.lifetime_remaining_secs <= 0.0 || projectile.range_remaining <= 0.0
}
