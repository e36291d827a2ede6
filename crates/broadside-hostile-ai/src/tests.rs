use std::f64::consts::PI;

use broadside_core::constants::*;
use broadside_core::enums::{HostileClass, HostilePhase};
use broadside_core::types::{normalize_angle, Position};

use crate::fsm::{evaluate, HostileContext};
use crate::profiles::{class_for_spawn, get_profile};

fn make_context(class: HostileClass, phase: HostilePhase, range: f64) -> HostileContext {
    // Hostile due north of the player, facing away.
    HostileContext {
        class,
        phase,
        position: Position::new(0.0, range),
        heading: 0.0,
        target: Position::new(0.0, 0.0),
        range_to_target: range,
        attack_cooldown_secs: 1.0,
        disengage_factor: ATTACK_DISENGAGE_FACTOR,
        dt: 1.0 / 60.0,
    }
}

#[test]
fn test_approach_turns_toward_player() {
    let ctx = make_context(HostileClass::Gunboat, HostilePhase::Approaching, 60.0);
    let update = evaluate(&ctx);
    assert!(!update.phase_changed);
    assert_eq!(update.new_phase, HostilePhase::Approaching);
    // Bearing to the player is PI; the turn is rate limited.
    let turned = normalize_angle(update.heading - ctx.heading).abs();
    assert!(turned > 0.0);
    assert!(turned <= GUNBOAT_TURN_RATE * ctx.dt + 1e-12);
    assert_eq!(update.speed, GUNBOAT_SPEED);
    assert!(!update.attack);
}

#[test]
fn test_approach_to_attack_inside_range() {
    let ctx = make_context(
        HostileClass::Gunboat,
        HostilePhase::Approaching,
        GUNBOAT_ATTACK_RANGE - 1.0,
    );
    let update = evaluate(&ctx);
    assert!(update.phase_changed);
    assert_eq!(update.new_phase, HostilePhase::Attacking);
}

#[test]
fn test_attack_holds_within_disengage_band() {
    let ctx = make_context(
        HostileClass::Gunboat,
        HostilePhase::Attacking,
        GUNBOAT_ATTACK_RANGE * 1.1,
    );
    let update = evaluate(&ctx);
    assert!(!update.phase_changed);
    assert_eq!(update.new_phase, HostilePhase::Attacking);
}

#[test]
fn test_attack_disengages_beyond_band() {
    let ctx = make_context(
        HostileClass::Gunboat,
        HostilePhase::Attacking,
        GUNBOAT_ATTACK_RANGE * ATTACK_DISENGAGE_FACTOR + 1.0,
    );
    let update = evaluate(&ctx);
    assert!(update.phase_changed);
    assert_eq!(update.new_phase, HostilePhase::Approaching);
}

#[test]
fn test_attack_fires_when_cooldown_expires() {
    let mut ctx = make_context(HostileClass::Frigate, HostilePhase::Attacking, 20.0);
    ctx.attack_cooldown_secs = 0.01;
    let update = evaluate(&ctx);
    assert!(update.attack);
    assert_eq!(update.attack_cooldown_secs, FRIGATE_ATTACK_INTERVAL_SECS);

    // Mid-cooldown: no attack, timer counts down.
    ctx.attack_cooldown_secs = 2.0;
    let update = evaluate(&ctx);
    assert!(!update.attack);
    assert!((update.attack_cooldown_secs - (2.0 - ctx.dt)).abs() < 1e-12);
}

#[test]
fn test_approaching_never_attacks() {
    let mut ctx = make_context(HostileClass::Raider, HostilePhase::Approaching, 100.0);
    ctx.attack_cooldown_secs = 0.0;
    assert!(!evaluate(&ctx).attack);
}

#[test]
fn test_attack_circles_broadside() {
    // Inside standoff: steer perpendicular to the bearing.
    let mut ctx = make_context(HostileClass::Gunboat, HostilePhase::Attacking, 5.0);
    ctx.heading = PI * 0.5;
    ctx.dt = 10.0;
    let update = evaluate(&ctx);
    let bearing = ctx.position.bearing_to(&ctx.target);
    let off = normalize_angle(update.heading - bearing).abs();
    assert!((off - PI * 0.5).abs() < 1e-9, "off = {off}");
}

#[test]
fn test_destroyed_is_terminal() {
    let mut ctx = make_context(HostileClass::Gunboat, HostilePhase::Destroyed, 5.0);
    ctx.attack_cooldown_secs = 0.0;
    let update = evaluate(&ctx);
    assert_eq!(update.new_phase, HostilePhase::Destroyed);
    assert!(!update.phase_changed);
    assert!(!update.attack);
    assert_eq!(update.speed, 0.0);
}

#[test]
fn test_zero_range_is_finite() {
    let ctx = make_context(HostileClass::Gunboat, HostilePhase::Attacking, 0.0);
    let update = evaluate(&ctx);
    assert!(update.heading.is_finite());
}

#[test]
fn test_gunboat_profile_matches_baseline() {
    let profile = get_profile(HostileClass::Gunboat);
    assert_eq!(profile.max_hp, 3.0);
    assert_eq!(profile.hit_radius, 2.0);
}

#[test]
fn test_profiles_are_distinct() {
    let raider = get_profile(HostileClass::Raider);
    let frigate = get_profile(HostileClass::Frigate);
    assert!(raider.speed > frigate.speed);
    assert!(frigate.max_hp > raider.max_hp);
    assert!(frigate.attack_range > raider.attack_range);
}

#[test]
fn test_class_rotation_by_wave() {
    for index in 0..20 {
        assert_eq!(class_for_spawn(1, index), HostileClass::Gunboat);
        assert_eq!(class_for_spawn(2, index), HostileClass::Gunboat);
    }
    assert_eq!(class_for_spawn(RAIDER_FIRST_WAVE, 2), HostileClass::Raider);
    assert_eq!(class_for_spawn(RAIDER_FIRST_WAVE, 4), HostileClass::Gunboat);
    assert_eq!(class_for_spawn(FRIGATE_FIRST_WAVE, 4), HostileClass::Frigate);
    // Slot 14 is both a raider and a frigate slot; the frigate wins.
    assert_eq!(class_for_spawn(FRIGATE_FIRST_WAVE, 14), HostileClass::Frigate);
}
