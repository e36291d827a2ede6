//! Turret battery: mounts on the player hull that track a shared world
//! target and fire projectiles into the ECS world.

use hecs::World;

use broadside_campaign::economy::{self, ResourceState};
use broadside_core::config::TurretTuning;
use broadside_core::enums::FireMode;
use broadside_core::events::SimEvent;
use broadside_core::state::TurretView;
use broadside_core::types::{heading_vector, normalize_angle, rotate_toward, Position};
use broadside_helm::vessel::Vessel;

use crate::world_setup;

/// One gun mount. Offsets are in hull coordinates.
#[derive(Debug, Clone)]
pub struct TurretMount {
    /// Offset toward port.
    pub lateral: f64,
    /// Offset along the keel toward the bow.
    pub fore: f64,
    /// Barrel angle relative to the keel (radians).
    pub local_aim: f64,
}

impl TurretMount {
    pub fn world_position(&self, vessel: &Vessel) -> Position {
        let (sin_h, cos_h) = vessel.heading.sin_cos();
        Position::new(
            vessel.position.x + sin_h * self.fore + cos_h * self.lateral,
            vessel.position.z + cos_h * self.fore - sin_h * self.lateral,
        )
    }

    /// World bearing of the barrel.
    pub fn world_aim(&self, vessel: &Vessel) -> f64 {
        normalize_angle(vessel.heading + self.local_aim)
    }

    /// Local angle that would put the barrel on `target`.
    fn desired_local_aim(&self, vessel: &Vessel, target: Option<Position>) -> f64 {
        match target {
            Some(target) => {
                let bearing = self.world_position(vessel).bearing_to(&target);
                normalize_angle(bearing - vessel.heading)
            }
            None => self.local_aim,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TurretBattery {
    pub mounts: Vec<TurretMount>,
    /// Shared aim point; mounts hold their angle when unset.
    pub target: Option<Position>,
    pub fire_mode: FireMode,
    pub reload_remaining_secs: f64,
    next_mount: usize,
}

impl TurretBattery {
    pub fn new(tuning: &TurretTuning) -> Self {
        Self {
            mounts: tuning
                .mounts
                .iter()
                .map(|&[lateral, fore]| TurretMount {
                    lateral,
                    fore,
                    local_aim: 0.0,
                })
                .collect(),
            target: None,
            fire_mode: FireMode::default(),
            reload_remaining_secs: 0.0,
            next_mount: 0,
        }
    }

    pub fn aim(&mut self, target: Position) {
        self.target = Some(target);
    }

    /// Rotate every mount toward the target at no more than `traverse_rate`
    /// and run the reload timer down.
    pub fn traverse(&mut self, vessel: &Vessel, dt: f64, traverse_rate: f64) {
        let dt = dt.max(0.0);
        self.reload_remaining_secs = (self.reload_remaining_secs - dt).max(0.0);
        let target = self.target;
        for mount in &mut self.mounts {
            let desired = mount.desired_local_aim(vessel, target);
            mount.local_aim = rotate_toward(mount.local_aim, desired, traverse_rate * dt);
        }
    }

    /// Mounts whose aim error is within `fire_arc`.
    pub fn eligible_mounts(&self, vessel: &Vessel, fire_arc: f64) -> Vec<usize> {
        self.mounts
            .iter()
            .enumerate()
            .filter(|(_, mount)| {
                let error = normalize_angle(
                    mount.desired_local_aim(vessel, self.target) - mount.local_aim,
                );
                error.abs() <= fire_arc
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Attempt to fire. Denied while reloading, with no eligible mount, or
    /// with an empty magazine; a denial spawns nothing and spends nothing.
    /// Success spends exactly one round and spawns one projectile per firing
    /// mount along its current barrel bearing.
    pub fn fire(
        &mut self,
        world: &mut World,
        vessel: &Vessel,
        resources: &mut ResourceState,
        tuning: &TurretTuning,
        events: &mut Vec<SimEvent>,
    ) -> bool {
        if self.reload_remaining_secs > 0.0 {
            return false;
        }
        let eligible = self.eligible_mounts(vessel, tuning.fire_arc);
        let firing = match self.fire_mode {
            FireMode::Salvo => eligible,
            FireMode::Alternating => self.next_alternating(&eligible).into_iter().collect(),
        };
        if firing.is_empty() {
            return false;
        }
        if !economy::spend_ammo(resources) {
            log::debug!("fire denied: magazine empty");
            return false;
        }

        for &index in &firing {
            let mount = &self.mounts[index];
            let velocity = heading_vector(mount.world_aim(vessel)) * tuning.muzzle_velocity;
            world_setup::spawn_projectile(
                world,
                mount.world_position(vessel),
                velocity,
                index,
                tuning,
            );
        }
        if self.fire_mode == FireMode::Alternating {
            if let Some(&last) = firing.last() {
                self.next_mount = (last + 1) % self.mounts.len().max(1);
            }
        }

        self.reload_remaining_secs = tuning.reload_secs;
        events.push(SimEvent::ShotFired {
            projectiles: firing.len() as u32,
        });
        true
    }

    /// First eligible mount at or after the rotation cursor, wrapping.
    fn next_alternating(&self, eligible: &[usize]) -> Option<usize> {
        eligible
            .iter()
            .copied()
            .find(|&index| index >= self.next_mount)
            .or_else(|| eligible.first().copied())
    }

    pub fn views(&self, vessel: &Vessel) -> Vec<TurretView> {
        self.mounts
            .iter()
            .map(|mount| TurretView {
                position: mount.world_position(vessel),
                world_aim: mount.world_aim(vessel),
                local_aim: mount.local_aim,
            })
            .collect()
    }
}
