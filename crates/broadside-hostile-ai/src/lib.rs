//! Hostile AI for BROADSIDE.
//!
//! Implements the pursuit/attack state machine and class-driven behavior
//! profiles for hostile vessels.

pub mod fsm;
pub mod profiles;

pub use broadside_core as core;

#[cfg(test)]
mod tests;
