//! Hostile behavior finite state machine.
//!
//! Pure functions that compute phase transitions, steering and attack timing
//! for hostile vessels from their class, current phase and situation.
//! No ECS dependency; operates on plain data.

use std::f64::consts::FRAC_PI_2;

use broadside_core::enums::{HostileClass, HostilePhase};
use broadside_core::types::{normalize_angle, rotate_toward, Position};

use crate::profiles::{get_profile, HostileProfile};

/// Input to the hostile FSM for a single unit.
#[derive(Debug, Clone, Copy)]
pub struct HostileContext {
    pub class: HostileClass,
    pub phase: HostilePhase,
    pub position: Position,
    pub heading: f64,
    /// Player vessel position.
    pub target: Position,
    pub range_to_target: f64,
    /// Seconds until the next attack attempt.
    pub attack_cooldown_secs: f64,
    /// Attack range multiple beyond which an attacking unit resumes pursuit.
    pub disengage_factor: f64,
    pub dt: f64,
}

/// Output from the hostile FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostileUpdate {
    pub new_phase: HostilePhase,
    pub heading: f64,
    pub speed: f64,
    pub phase_changed: bool,
    /// An attack attempt is due this tick.
    pub attack: bool,
    pub attack_cooldown_secs: f64,
}

/// Evaluate the FSM for one hostile. Returns the updated phase, steering and
/// attack timing.
pub fn evaluate(ctx: &HostileContext) -> HostileUpdate {
    if ctx.phase == HostilePhase::Destroyed {
        return HostileUpdate {
            new_phase: HostilePhase::Destroyed,
            heading: ctx.heading,
            speed: 0.0,
            phase_changed: false,
            attack: false,
            attack_cooldown_secs: ctx.attack_cooldown_secs,
        };
    }

    let profile = get_profile(ctx.class);
    let new_phase = next_phase(ctx, &profile);
    let desired = match new_phase {
        HostilePhase::Attacking => circling_heading(ctx, &profile),
        _ => ctx.position.bearing_to(&ctx.target),
    };
    let heading = rotate_toward(ctx.heading, desired, profile.turn_rate * ctx.dt.max(0.0));

    let mut cooldown = (ctx.attack_cooldown_secs - ctx.dt).max(0.0);
    let attack = new_phase == HostilePhase::Attacking && cooldown <= 0.0;
    if attack {
        cooldown = profile.attack_interval_secs;
    }

    HostileUpdate {
        new_phase,
        heading,
        speed: profile.speed,
        phase_changed: new_phase != ctx.phase,
        attack,
        attack_cooldown_secs: cooldown,
    }
}

fn next_phase(ctx: &HostileContext, profile: &HostileProfile) -> HostilePhase {
    match ctx.phase {
        HostilePhase::Approaching if ctx.range_to_target <= profile.attack_range => {
            HostilePhase::Attacking
        }
        HostilePhase::Attacking
            if ctx.range_to_target > profile.attack_range * ctx.disengage_factor =>
        {
            HostilePhase::Approaching
        }
        phase => phase,
    }
}

/// Broadside circling: steer across the bearing to the target, cutting the
/// angle inward when outside the standoff distance.
fn circling_heading(ctx: &HostileContext, profile: &HostileProfile) -> f64 {
    let bearing = ctx.position.bearing_to(&ctx.target);
    let side = if normalize_angle(ctx.heading - bearing) < 0.0 {
        -1.0
    } else {
        1.0
    };
    let offset = if ctx.range_to_target > 0.0 {
        FRAC_PI_2 * (profile.standoff() / ctx.range_to_target).min(1.0)
    } else {
        FRAC_PI_2
    };
    normalize_angle(bearing + side * offset)
}
