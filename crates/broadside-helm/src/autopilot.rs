//! Point-and-go navigation.
//!
//! While a destination is set the autopilot owns heading and speed: it turns
//! toward the target at a fixed rate, sheds speed when badly misaligned, and
//! slows proportionally inside the slow radius.

use broadside_core::config::HelmTuning;
use broadside_core::types::{normalize_angle, rotate_toward, Position};

use crate::kinematics::decay_toward_zero;
use crate::vessel::Vessel;

/// Engage the autopilot toward `target`, replacing any previous destination.
pub fn set_destination(vessel: &mut Vessel, target: Position) {
    vessel.destination = Some(target);
}

/// Disengage the autopilot. Idempotent.
pub fn clear_destination(vessel: &mut Vessel) {
    vessel.destination = None;
}

/// Desired speed at `distance` from the destination.
pub fn approach_speed(distance: f64, effective_max: f64, tuning: &HelmTuning) -> f64 {
    if tuning.nav_slow_radius > 0.0 {
        effective_max * (distance / tuning.nav_slow_radius).min(1.0)
    } else {
        effective_max
    }
}

/// One autopilot step toward `destination`. Returns `true` on arrival, in
/// which case the destination has been cleared and speed decayed.
pub fn steer(
    vessel: &mut Vessel,
    destination: Position,
    dt: f64,
    effective_max: f64,
    tuning: &HelmTuning,
) -> bool {
    let distance = vessel.position.range_to(&destination);
    if distance < tuning.nav_arrive_radius {
        clear_destination(vessel);
        vessel.speed *= tuning.nav_arrival_decay;
        return true;
    }

    let bearing = vessel.position.bearing_to(&destination);
    let misalignment = normalize_angle(bearing - vessel.heading);
    vessel.heading = rotate_toward(vessel.heading, bearing, tuning.nav_turn_rate * dt);

    if misalignment.abs() < tuning.nav_align_tolerance {
        let desired = approach_speed(distance, effective_max, tuning);
        if vessel.speed < desired {
            vessel.speed = (vessel.speed + tuning.accel * dt).min(desired);
        } else {
            vessel.speed = (vessel.speed - tuning.drag * dt).max(desired);
        }
    } else {
        // Turning in place.
        vessel.speed = decay_toward_zero(vessel.speed, tuning.drag * dt);
    }

    false
}
