//! Scripted pilot: chases the nearest live hostile, keeps the guns on it
//! and spends salvage between waves.

use broadside_core::commands::PlayerCommand;
use broadside_core::enums::{UpgradeKey, WavePhase};
use broadside_core::input::ControlInput;
use broadside_core::state::{GameStateSnapshot, HostileView};

/// Preferred distance to the current target.
const ENGAGE_RANGE: f64 = 25.0;

/// Order in which the pilot buys upgrades during a pause.
const SHOPPING_LIST: [UpgradeKey; 4] = [
    UpgradeKey::Hull,
    UpgradeKey::Gunnery,
    UpgradeKey::Magazine,
    UpgradeKey::Engines,
];

#[derive(Debug, Default)]
pub struct Pilot {
    /// Wave whose pause the shopping list was last run for.
    shopped_wave: u32,
}

impl Pilot {
    /// Decide this frame's input and any commands from the last snapshot.
    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> (ControlInput, Vec<PlayerCommand>) {
        let mut commands = Vec::new();

        if snapshot.wave.phase == WavePhase::Pause && self.shopped_wave != snapshot.wave.number {
            self.shopped_wave = snapshot.wave.number;
            commands.extend(
                SHOPPING_LIST
                    .iter()
                    .map(|&key| PlayerCommand::BuyUpgrade { key }),
            );
        }

        let Some(target) = nearest_hostile(snapshot) else {
            return (ControlInput::default(), commands);
        };

        let own = snapshot.vessel.position;
        let range = own.range_to(&target.position);
        if range > ENGAGE_RANGE {
            commands.push(PlayerCommand::SetDestination {
                x: target.position.x,
                z: target.position.z,
            });
        } else if snapshot.vessel.destination.is_some() {
            commands.push(PlayerCommand::ClearDestination);
        }

        let input = ControlInput {
            aim_point: Some(target.position),
            fire: snapshot.resources.ammo > 0,
            ability: range > ENGAGE_RANGE * 2.0,
            ..Default::default()
        };
        (input, commands)
    }
}

fn nearest_hostile(snapshot: &GameStateSnapshot) -> Option<&HostileView> {
    let own = snapshot.vessel.position;
    snapshot
        .hostiles
        .iter()
        .filter(|h| h.alive)
        .min_by(|a, b| {
            own.range_to(&a.position)
                .total_cmp(&own.range_to(&b.position))
                .then(a.unit_id.cmp(&b.unit_id))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside_sim::engine::SimConfig;
    use broadside_sim::SimulationEngine;

    #[test]
    fn test_pilot_engages_spawned_hostiles() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartSession);
        let mut snapshot = engine.tick(&ControlInput::default(), 1.0 / 30.0);
        let mut pilot = Pilot::default();

        for _ in 0..300 {
            let (input, commands) = pilot.decide(&snapshot);
            engine.queue_commands(commands);
            snapshot = engine.tick(&input, 1.0 / 30.0);
        }
        assert!(engine.score().shots_fired > 0);
    }

    #[test]
    fn test_pilot_idles_without_targets() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let mut pilot = Pilot::default();
        let snapshot = engine.tick(&ControlInput::default(), 0.0);
        let (input, _) = pilot.decide(&snapshot);
        assert_eq!(input, ControlInput::default());
    }
}
