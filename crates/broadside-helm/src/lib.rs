//! Helm for BROADSIDE: player vessel kinematics, autopilot and wave-riding
//! attitude.
//!
//! Pure functions over plain data. No ECS dependency; the simulation engine
//! owns the [`vessel::Vessel`] and calls [`kinematics::advance`] once per tick.

pub mod attitude;
pub mod autopilot;
pub mod kinematics;
pub mod vessel;

pub use broadside_core as core;
