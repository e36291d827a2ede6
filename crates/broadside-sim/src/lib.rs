//! Simulation engine for BROADSIDE.
//!
//! Owns the hecs ECS world of hostiles, projectiles and pickups, drives the
//! player ship through the helm and campaign crates, and produces a
//! `GameStateSnapshot` after every tick.

pub mod battery;
pub mod engine;
pub mod player;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use broadside_core as core;
pub use engine::SimulationEngine;
