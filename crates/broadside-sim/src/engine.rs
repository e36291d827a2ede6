//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the player ship, processes
//! player commands, runs all systems in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use broadside_campaign::economy::{self, ResourceState};
use broadside_campaign::waves;
use broadside_core::commands::PlayerCommand;
use broadside_core::config::TuningConfig;
use broadside_core::constants::MAX_FRAME_DT;
use broadside_core::enums::{FireMode, GamePhase, UpgradeKey};
use broadside_core::events::SimEvent;
use broadside_core::input::ControlInput;
use broadside_core::ocean::{LayeredSwell, WaveHeightField};
use broadside_core::state::GameStateSnapshot;
use broadside_core::types::{Position, SimTime};
use broadside_helm::attitude::HullSampler;
use broadside_helm::autopilot;
use broadside_helm::kinematics;
use broadside_helm::vessel::Vessel;

use crate::player::PlayerShip;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::wave_spawner::{SpawnClock, SpawnPolicy};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tuning: TuningConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: TuningConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine<F = LayeredSwell> {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    tuning: TuningConfig,
    field: F,
    player: PlayerShip,
    spawn_clock: SpawnClock,
    next_unit_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    score: ScoreState,
}

impl SimulationEngine<LayeredSwell> {
    /// Create a new simulation engine over the reference sea state.
    pub fn new(config: SimConfig) -> Self {
        Self::with_field(config, LayeredSwell::default())
    }
}

impl<F: WaveHeightField> SimulationEngine<F> {
    /// Create a new simulation engine over a custom water surface.
    pub fn with_field(config: SimConfig, field: F) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: PlayerShip::new(&config.tuning),
            tuning: config.tuning,
            field,
            spawn_clock: SpawnClock::default(),
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds under `input` and return the
    /// resulting snapshot. `dt` is clamped to `[0, MAX_FRAME_DT]`; a
    /// non-finite `dt` advances nothing.
    pub fn tick(&mut self, input: &ControlInput, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        if self.phase == GamePhase::Active {
            self.run_systems(input, dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.player,
            &self.tuning,
            events,
            &self.score,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn vessel(&self) -> &Vessel {
        &self.player.vessel
    }

    pub fn resources(&self) -> &ResourceState {
        &self.player.resources
    }

    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Overwrite the player's hull points, clamped to `[0, max_hp]`.
    pub fn set_player_hp(&mut self, hp: f64) {
        let vessel = &mut self.player.vessel;
        vessel.hp = hp.clamp(0.0, vessel.max_hp);
    }

    /// Mutable access to the stores, for scenario setup.
    pub fn resources_mut(&mut self) -> &mut ResourceState {
        &mut self.player.resources
    }

    /// Place a hostile at a fixed spot (for tests).
    #[cfg(test)]
    pub fn spawn_test_hostile(
        &mut self,
        class: broadside_core::enums::HostileClass,
        position: Position,
    ) -> broadside_core::components::UnitId {
        let unit_id = broadside_core::components::UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        world_setup::spawn_hostile_at(&mut self.world, class, unit_id, position, 0.0);
        unit_id
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerShip {
        &mut self.player
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let in_session = matches!(self.phase, GamePhase::Active | GamePhase::Paused);
        match command {
            PlayerCommand::StartSession => {
                if matches!(self.phase, GamePhase::Standby | GamePhase::Sunk) {
                    self.start_session();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetDestination { x, z } => {
                if in_session && x.is_finite() && z.is_finite() {
                    autopilot::set_destination(&mut self.player.vessel, Position::new(x, z));
                }
            }
            PlayerCommand::ClearDestination => {
                autopilot::clear_destination(&mut self.player.vessel);
            }
            PlayerCommand::BuyUpgrade { key } => {
                if in_session {
                    self.buy_upgrade(key);
                }
            }
        }
    }

    fn start_session(&mut self) {
        self.world.clear();
        self.player = PlayerShip::new(&self.tuning);
        self.spawn_clock = SpawnClock::default();
        self.next_unit_id = 0;
        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        log::info!("session started");
        self.events.push(SimEvent::WaveStarted {
            wave: self.player.resources.wave,
            hostiles: self.player.resources.to_spawn,
        });
    }

    fn buy_upgrade(&mut self, key: UpgradeKey) {
        let player = &mut self.player;
        let cost = match player.upgrades.purchase(key, &mut player.resources) {
            Ok(cost) => cost,
            Err(err) => {
                log::debug!("upgrade denied: {err}");
                return;
            }
        };

        match key {
            UpgradeKey::Hull => {
                let max_hp = player.upgrades.effective_helm(&self.tuning.helm).max_hp;
                let delta = max_hp - player.vessel.max_hp;
                player.vessel.max_hp = max_hp;
                player.vessel.hp = (player.vessel.hp + delta).clamp(0.0, max_hp);
            }
            UpgradeKey::Magazine | UpgradeKey::FuelTank => {
                let (max_ammo, max_fuel) =
                    player.upgrades.effective_capacity(&self.tuning.economy);
                player.resources.set_capacity(max_ammo, max_fuel);
            }
            _ => {}
        }

        self.events.push(SimEvent::UpgradePurchased {
            key,
            tier: player.upgrades.tier(key),
            cost,
        });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &ControlInput, dt: f64) {
        let now = self.time.elapsed_secs + dt;
        let helm = self.player.upgrades.effective_helm(&self.tuning.helm);
        let turret = self.player.upgrades.effective_turret(&self.tuning.turret);
        let economy_tuning = &self.tuning.economy;
        let player = &mut self.player;

        // 1. Discrete inputs
        if let Some(mode) = input.weapon_switch.and_then(FireMode::from_index) {
            player.battery.fire_mode = mode;
        }
        if input.ability && player.boost.engage(&player.resources, economy_tuning) {
            log::debug!("flank speed engaged");
        }

        // 2. Vessel kinematics and autopilot
        let multiplier = economy::speed_multiplier(&player.resources, economy_tuning)
            * player.boost.speed_multiplier(economy_tuning);
        let report = kinematics::advance(
            &mut player.vessel,
            input,
            dt,
            &self.field,
            now,
            multiplier,
            &helm,
        );
        if report.arrived {
            self.events.push(SimEvent::DestinationReached);
        }

        // 3. Aim and fire
        if let Some(target) = input.aim_point {
            player.battery.aim(target);
        }
        player
            .battery
            .traverse(&player.vessel, dt, turret.traverse_rate);
        if input.fire
            && player.battery.fire(
                &mut self.world,
                &player.vessel,
                &mut player.resources,
                &turret,
                &mut self.events,
            )
        {
            self.score.shots_fired += 1;
        }

        // 4. Projectile flight and hit resolution
        let hits = systems::intercept::run(&mut self.world, dt);

        // 5. Hostiles: damage, salvage drops, spawning, behavior
        let deaths = systems::hostile_ai::apply_hits(
            &mut self.world,
            &hits,
            &mut self.events,
            &mut self.score,
        );
        systems::salvage::drop_pickups(
            &mut self.world,
            &mut self.rng,
            &deaths,
            &self.tuning.salvage,
            &mut self.events,
        );
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut player.resources,
            &mut self.spawn_clock,
            &SpawnPolicy::from(&self.tuning.waves),
            &self.tuning.hostiles,
            &mut self.next_unit_id,
            &mut self.events,
            dt,
        );
        let sampler = HullSampler {
            float_offset: self.tuning.hostiles.float_offset,
            ..HullSampler::from_helm(&helm)
        };
        systems::hostile_ai::run(
            &mut self.world,
            &mut player.vessel,
            &self.field,
            dt,
            now,
            &self.tuning.hostiles,
            &sampler,
            &mut self.rng,
            &mut self.events,
            &mut self.score,
        );

        // 6. Economy and wave transitions
        let throttle = if helm.max_speed > 0.0 {
            player.vessel.speed.abs() / helm.max_speed
        } else {
            0.0
        };
        economy::consume_fuel(
            &mut player.resources,
            throttle * player.boost.fuel_factor(economy_tuning),
            dt,
            economy_tuning,
        );
        player.boost.tick(dt, economy_tuning);
        systems::salvage::collect(
            &mut self.world,
            player.vessel.position,
            &mut player.resources,
            &self.tuning.salvage,
            dt,
            &mut self.events,
        );

        let alive = world_setup::count_alive(&self.world);
        let was_active = player.resources.wave_active;
        let wave_before = player.resources.wave;
        let parts_before = player.resources.parts;
        if let Some(hp) = waves::update_wave(
            &mut player.resources,
            alive,
            player.vessel.hp,
            player.vessel.max_hp,
            dt,
            &self.tuning.waves,
            economy_tuning.repair_per_part,
        ) {
            self.events.push(SimEvent::Repaired {
                hp_restored: hp - player.vessel.hp,
                parts_used: parts_before - player.resources.parts,
            });
            player.vessel.hp = hp;
        }
        if was_active && !player.resources.wave_active {
            self.score.waves_cleared += 1;
            self.events.push(SimEvent::WaveCleared { wave: wave_before });
        }
        if player.resources.wave != wave_before {
            self.events.push(SimEvent::WaveStarted {
                wave: player.resources.wave,
                hostiles: player.resources.to_spawn,
            });
        }

        // 7. Cleanup
        let strays = systems::cleanup::run(
            &mut self.world,
            &self.tuning.hostiles,
            &mut self.despawn_buffer,
        );
        if strays > 0 {
            log::debug!("{strays} hostiles strayed off the field; requeued");
            waves::requeue_spawns(&mut player.resources, strays);
        }

        if player.vessel.is_sunk() {
            self.phase = GamePhase::Sunk;
            log::info!(
                "vessel sunk in wave {} after {} kills",
                player.resources.wave,
                self.score.kills
            );
            self.events.push(SimEvent::Sunk);
        }
    }
}
