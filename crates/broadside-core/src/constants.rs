//! Simulation constants and tuning defaults.
//!
//! These are the authoritative defaults behind [`crate::config::TuningConfig`];
//! a tuning file may override any of them at startup.

use std::f64::consts::PI;

/// Largest frame delta the engine will integrate in one tick (seconds).
pub const MAX_FRAME_DT: f64 = 0.1;

// --- Helm ---

/// Top forward speed at full fuel (units/s).
pub const MAX_SPEED: f64 = 30.0;

/// Forward acceleration (units/s²).
pub const ACCEL: f64 = 12.0;

/// Reverse acceleration (units/s²).
pub const REVERSE_ACCEL: f64 = 6.0;

/// Passive deceleration toward zero when no throttle is held (units/s²).
pub const DRAG: f64 = 4.0;

/// Turning rate at zero speed (rad/s).
pub const TURN_RATE_LOW: f64 = 2.2;

/// Turning rate at maximum speed (rad/s).
pub const TURN_RATE_HIGH: f64 = 0.8;

/// Speed over which the low-speed turn ramp reaches full authority.
pub const TURN_RAMP_SPEED: f64 = 5.0;

/// Turn authority of a stationary hull.
pub const TURN_RAMP_FLOOR: f64 = 0.1;

/// Reverse speed cap as a fraction of the effective max speed.
pub const REVERSE_SPEED_FRACTION: f64 = 0.3;

/// Height above the wave surface so the hull clears peaks.
pub const FLOAT_OFFSET: f64 = 1.2;

/// Distance of the fore/aft/port/starboard wave samples from the hull origin.
pub const ATTITUDE_SAMPLE_DIST: f64 = 1.5;

/// Damping applied to the raw wave slope angles.
pub const ATTITUDE_DAMPING: f64 = 0.3;

/// Player hull points at session start.
pub const PLAYER_MAX_HP: f64 = 100.0;

// --- Autopilot ---

/// Distance at which a destination counts as reached.
pub const NAV_ARRIVE_RADIUS: f64 = 3.0;

/// Distance inside which desired speed scales down linearly.
pub const NAV_SLOW_RADIUS: f64 = 15.0;

/// Autopilot turning rate (rad/s).
pub const NAV_TURN_RATE: f64 = 2.5;

/// Speed factor applied once on arrival.
pub const NAV_ARRIVAL_DECAY: f64 = 0.8;

/// Heading error below which the autopilot commits to travel.
pub const NAV_ALIGN_TOLERANCE: f64 = PI * 0.5;

// --- Turrets ---

/// Turret traverse rate (rad/s).
pub const TURRET_TRAVERSE_RATE: f64 = 3.0;

/// Projectile muzzle velocity (units/s).
pub const MUZZLE_VELOCITY: f64 = 60.0;

/// Projectile lifetime (seconds).
pub const PROJECTILE_LIFETIME_SECS: f64 = 1.5;

/// Projectile range limit (units).
pub const PROJECTILE_MAX_RANGE: f64 = 90.0;

/// Damage dealt by one projectile hit.
pub const PROJECTILE_DAMAGE: f64 = 1.0;

/// Minimum interval between successful fire requests (seconds).
pub const RELOAD_SECS: f64 = 0.25;

/// Largest aim error at which a mount may fire (radians).
pub const FIRE_ARC: f64 = PI;

/// Forward mount offset along the keel (lateral, fore).
pub const FORWARD_MOUNT_OFFSET: [f64; 2] = [0.0, 0.8];

/// Aft mount offset along the keel (lateral, fore).
pub const AFT_MOUNT_OFFSET: [f64; 2] = [0.0, -1.4];

// --- Economy ---

pub const STARTING_AMMO: u32 = 50;
pub const MAX_AMMO: u32 = 80;
pub const STARTING_FUEL: f64 = 100.0;
pub const MAX_FUEL: f64 = 100.0;

/// Fuel burned per second at full throttle.
pub const FUEL_BURN_RATE: f64 = 1.5;

/// Speed multiplier at zero fuel.
pub const LOW_FUEL_SPEED_MULT: f64 = 0.35;

/// Fuel ratio below which top speed starts to drop.
pub const LOW_FUEL_THRESHOLD: f64 = 0.2;

/// Hull points restored per salvage part.
pub const REPAIR_PER_PART: f64 = 2.0;

// --- Flank boost ---

pub const BOOST_SPEED_MULT: f64 = 1.25;
pub const BOOST_DURATION_SECS: f64 = 3.0;
pub const BOOST_COOLDOWN_SECS: f64 = 15.0;

/// Fuel burn multiplier while boosting.
pub const BOOST_FUEL_FACTOR: f64 = 2.0;

// --- Waves ---

/// Hostiles in wave 1.
pub const WAVE_ENEMY_COUNT_BASE: u32 = 3;

/// Extra hostiles per subsequent wave.
pub const WAVE_ENEMY_INCREMENT: u32 = 2;

/// Pause between waves (seconds).
pub const WAVE_PAUSE_DURATION_SECS: f64 = 4.0;

/// Interval between spawn batches within a wave (seconds).
pub const SPAWN_INTERVAL_SECS: f64 = 1.5;

/// Hostiles introduced per spawn batch.
pub const SPAWN_BATCH_SIZE: u32 = 1;

/// Cap on simultaneously alive hostiles; spawning waits while at the cap.
pub const MAX_ALIVE_HOSTILES: u32 = 12;

// --- Hostiles ---

pub const SPAWN_RING_MIN: f64 = 40.0;
pub const SPAWN_RING_MAX: f64 = 70.0;

/// Hostiles farther than this from the origin are despawned and requeued.
pub const HOSTILE_DESPAWN_RADIUS: f64 = 400.0;

/// Hostile hull clearance above the wave surface.
pub const HOSTILE_FLOAT_OFFSET: f64 = 1.0;

/// Attack range multiple at which an attacking hostile resumes its approach.
pub const ATTACK_DISENGAGE_FACTOR: f64 = 1.3;

pub const GUNBOAT_HP: f64 = 3.0;
pub const GUNBOAT_HIT_RADIUS: f64 = 2.0;
pub const GUNBOAT_SPEED: f64 = 8.0;
pub const GUNBOAT_TURN_RATE: f64 = 1.2;
pub const GUNBOAT_ATTACK_RANGE: f64 = 28.0;
pub const GUNBOAT_ATTACK_DAMAGE: f64 = 5.0;
pub const GUNBOAT_ATTACK_INTERVAL_SECS: f64 = 3.0;
pub const GUNBOAT_ACCURACY: f64 = 0.6;

pub const RAIDER_HP: f64 = 2.0;
pub const RAIDER_HIT_RADIUS: f64 = 1.6;
pub const RAIDER_SPEED: f64 = 13.0;
pub const RAIDER_TURN_RATE: f64 = 1.8;
pub const RAIDER_ATTACK_RANGE: f64 = 18.0;
pub const RAIDER_ATTACK_DAMAGE: f64 = 3.0;
pub const RAIDER_ATTACK_INTERVAL_SECS: f64 = 1.8;
pub const RAIDER_ACCURACY: f64 = 0.5;

pub const FRIGATE_HP: f64 = 6.0;
pub const FRIGATE_HIT_RADIUS: f64 = 2.6;
pub const FRIGATE_SPEED: f64 = 6.0;
pub const FRIGATE_TURN_RATE: f64 = 0.7;
pub const FRIGATE_ATTACK_RANGE: f64 = 40.0;
pub const FRIGATE_ATTACK_DAMAGE: f64 = 9.0;
pub const FRIGATE_ATTACK_INTERVAL_SECS: f64 = 4.5;
pub const FRIGATE_ACCURACY: f64 = 0.7;

/// First wave in which raiders join the spawn rotation.
pub const RAIDER_FIRST_WAVE: u32 = 3;

/// First wave in which frigates join the spawn rotation.
pub const FRIGATE_FIRST_WAVE: u32 = 5;

// --- Salvage pickups ---

pub const PICKUP_DROP_CHANCE: f64 = 0.6;
pub const PICKUP_RADIUS: f64 = 3.0;
pub const PICKUP_LIFETIME_SECS: f64 = 20.0;
pub const PICKUP_AMMO_AMOUNT: u32 = 10;
pub const PICKUP_FUEL_AMOUNT: f64 = 20.0;
pub const PICKUP_PARTS_AMOUNT: u32 = 2;

// --- Upgrades ---

/// Highest tier any upgrade can reach.
pub const UPGRADE_MAX_TIER: u32 = 3;
