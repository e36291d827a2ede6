//! Core types and definitions for the BROADSIDE naval combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, input snapshots, state snapshots, events, tuning
//! configuration and constants. It has no dependency on any renderer or
//! runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod ocean;
pub mod state;
pub mod types;
