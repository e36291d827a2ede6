//! skirmish: headless harness that runs the naval combat simulation with a
//! scripted pilot and reports the outcome.
//!
//! Usage:
//!   skirmish --seconds 120 --seed 7
//!   skirmish --config tuning.toml --json > run.json

mod logging;
mod pilot;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::Serialize;

use broadside_core::commands::PlayerCommand;
use broadside_core::config::TuningConfig;
use broadside_core::enums::GamePhase;
use broadside_core::events::SimEvent;
use broadside_core::input::ControlInput;
use broadside_core::state::ScoreView;
use broadside_sim::engine::SimConfig;
use broadside_sim::SimulationEngine;

use crate::pilot::Pilot;

/// Run a scripted naval skirmish without a renderer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML tuning file; compiled defaults are used when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulated seconds to run.
    #[arg(short, long, default_value_t = 120.0)]
    seconds: f64,

    /// RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Frame delta in seconds.
    #[arg(long, default_value_t = 1.0 / 30.0)]
    dt: f64,

    /// Print the final summary as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    phase: GamePhase,
    wave: u32,
    hull: f64,
    ammo: u32,
    fuel: f64,
    parts: u32,
    upgrades_bought: u32,
    score: ScoreView,
}

fn load_tuning(path: Option<&PathBuf>) -> TuningConfig {
    let Some(path) = path else {
        return TuningConfig::default();
    };
    match TuningConfig::load(path) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::warn!("{e}; falling back to default tuning");
            TuningConfig::default()
        }
    }
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if !(args.dt.is_finite() && args.dt > 0.0) {
        eprintln!("Error: --dt must be a positive number of seconds");
        process::exit(1);
    }

    let tuning = load_tuning(args.config.as_ref());
    let mut engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        tuning,
    });
    engine.queue_command(PlayerCommand::StartSession);

    let mut pilot = Pilot::default();
    let mut snapshot = engine.tick(&ControlInput::default(), args.dt);
    let mut upgrades_bought = 0;
    let frames = (args.seconds.max(0.0) / args.dt).ceil() as u64;

    for _ in 0..frames {
        if snapshot.phase == GamePhase::Sunk {
            break;
        }
        let (input, commands) = pilot.decide(&snapshot);
        engine.queue_commands(commands);
        snapshot = engine.tick(&input, args.dt);
        upgrades_bought += snapshot
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::UpgradePurchased { .. }))
            .count() as u32;
    }

    let summary = Summary {
        seed: args.seed,
        phase: snapshot.phase,
        wave: snapshot.wave.number,
        hull: snapshot.vessel.hp,
        ammo: snapshot.resources.ammo,
        fuel: snapshot.resources.fuel,
        parts: snapshot.resources.parts,
        upgrades_bought,
        score: snapshot.score,
    };

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing summary: {e}");
                process::exit(1);
            }
        }
        return;
    }

    println!(
        "Skirmish finished after {:.1}s ({:?})",
        summary.score.session_time_secs, summary.phase
    );
    println!("  wave reached   {}", summary.wave);
    println!("  kills          {}", summary.score.kills);
    println!("  shots / hits   {} / {}", summary.score.shots_fired, summary.score.hits);
    println!("  waves cleared  {}", summary.score.waves_cleared);
    println!("  hull           {:.1}", summary.hull);
    println!("  ammo / fuel    {} / {:.1}", summary.ammo, summary.fuel);
    println!(
        "  parts          {} ({} upgrades bought)",
        summary.parts, summary.upgrades_bought
    );
}
