//! Per-tick vessel motion: throttle, drag, turning and integration.

use broadside_core::config::HelmTuning;
use broadside_core::input::ControlInput;
use broadside_core::ocean::WaveHeightField;
use broadside_core::types::{heading_vector, normalize_angle, Position};

use crate::attitude::{self, HullSampler};
use crate::autopilot;
use crate::vessel::Vessel;

/// What happened to the vessel during one helm step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HelmReport {
    /// The autopilot reached its destination this step.
    pub arrived: bool,
    /// Manual input disengaged an active autopilot this step.
    pub autopilot_overridden: bool,
}

/// Top forward speed after the resource/boost multiplier.
pub fn effective_max_speed(tuning: &HelmTuning, speed_multiplier: f64) -> f64 {
    tuning.max_speed * speed_multiplier.max(0.0)
}

/// Manual turn rate at a given speed.
///
/// Interpolates from `turn_rate_low` at rest to `turn_rate_high` at top speed,
/// then scales by a ramp so a stationary hull barely turns.
pub fn turn_rate(speed: f64, effective_max: f64, tuning: &HelmTuning) -> f64 {
    let abs_speed = speed.abs();
    let ratio = if effective_max > 0.0 {
        (abs_speed / effective_max).min(1.0)
    } else {
        1.0
    };
    let base = tuning.turn_rate_low + (tuning.turn_rate_high - tuning.turn_rate_low) * ratio;
    let ramp = if tuning.turn_ramp_speed > 0.0 {
        (abs_speed / tuning.turn_ramp_speed)
            .max(tuning.turn_ramp_floor)
            .min(1.0)
    } else {
        1.0
    };
    base * ramp
}

/// Move `speed` toward zero by at most `step` without crossing it.
pub(crate) fn decay_toward_zero(speed: f64, step: f64) -> f64 {
    if speed > 0.0 {
        (speed - step).max(0.0)
    } else {
        (speed + step).min(0.0)
    }
}

/// Advance the vessel by `dt` seconds.
///
/// Manual input always wins: any held steering or throttle flag clears the
/// autopilot destination before motion is computed. Speed is clamped to
/// `[-reverse_fraction * max, max]` of the effective top speed, heading is
/// normalized, and the attitude is resampled from `field` at `elapsed`.
pub fn advance(
    vessel: &mut Vessel,
    input: &ControlInput,
    dt: f64,
    field: &impl WaveHeightField,
    elapsed: f64,
    speed_multiplier: f64,
    tuning: &HelmTuning,
) -> HelmReport {
    let mut report = HelmReport::default();
    let effective_max = effective_max_speed(tuning, speed_multiplier);
    let manual = input.manual_active();

    if manual && vessel.destination.is_some() {
        autopilot::clear_destination(vessel);
        report.autopilot_overridden = true;
    }

    match vessel.destination {
        Some(destination) => {
            report.arrived = autopilot::steer(vessel, destination, dt, effective_max, tuning);
        }
        None => manual_control(vessel, input, dt, effective_max, tuning),
    }

    let max_reverse = effective_max * tuning.reverse_fraction;
    vessel.speed = vessel.speed.min(effective_max).max(-max_reverse);
    vessel.heading = normalize_angle(vessel.heading);

    let step = heading_vector(vessel.heading) * (vessel.speed * dt);
    vessel.position = Position::new(vessel.position.x + step.x, vessel.position.z + step.y);

    vessel.attitude = attitude::sample(
        field,
        vessel.position,
        vessel.heading,
        elapsed,
        &HullSampler::from_helm(tuning),
    );

    report
}

fn manual_control(
    vessel: &mut Vessel,
    input: &ControlInput,
    dt: f64,
    effective_max: f64,
    tuning: &HelmTuning,
) {
    if input.forward {
        vessel.speed += tuning.accel * dt;
    } else if input.backward {
        vessel.speed -= tuning.reverse_accel * dt;
    } else {
        vessel.speed = decay_toward_zero(vessel.speed, tuning.drag * dt);
    }

    let rate = turn_rate(vessel.speed, effective_max, tuning);
    if input.left {
        vessel.heading += rate * dt;
    }
    if input.right {
        vessel.heading -= rate * dt;
    }
}
