//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Continuous
//! controls (steering, aim, fire) travel in [`crate::input::ControlInput`]
//! instead.

use serde::{Deserialize, Serialize};

use crate::enums::UpgradeKey;

/// All discrete player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session ---
    /// Start a fresh session: new vessel, full stores, wave 1.
    StartSession,
    Pause,
    Resume,

    // --- Navigation ---
    /// Engage the autopilot toward a point on the water.
    SetDestination { x: f64, z: f64 },
    /// Disengage the autopilot.
    ClearDestination,

    // --- Refit ---
    /// Buy the next tier of an upgrade with salvage parts (pause phase only).
    BuyUpgrade { key: UpgradeKey },
}
