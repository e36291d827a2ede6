//! Logger setup for the skirmish harness.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Route simulation logs to stderr so `--json` output on stdout stays
/// parseable.
///
/// By default only wave, repair and upgrade milestones (info) are shown;
/// `--verbose` adds per-spawn, per-kill and pickup detail (debug). A
/// `RUST_LOG` filter overrides both.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(level.to_string()));
    builder.target(Target::Stderr).format_timestamp(None);

    // A logger installed earlier (e.g. by a test) stays in place.
    let _ = builder.try_init();
}
