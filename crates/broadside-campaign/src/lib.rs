//! Campaign layer for BROADSIDE: the resource economy, the wave/repair
//! state machine and the upgrade table.

pub mod economy;
pub mod upgrades;
pub mod waves;

pub use broadside_core as core;
