//! Host boundary: the callable entry points a lifecycle adapter wires up.
//!
//! The core never depends on any hosting framework; the adapter (here,
//! `src/main.rs`) loads the config, obtains a logger, and calls [`run`] on
//! its lifecycle event, then [`disable_if_configured`] once the loop is done.

pub mod runner;

use crate::core::config::Config;
use crate::core::errors::Result;
use crate::core::paths::resolve_absolute_path;
use crate::logger::lines::RunLogger;

pub use runner::{RegenRunner, RunSummary, TargetOutcome};

/// Trigger one regeneration run.
///
/// Returns `None` without touching the filesystem when the config is
/// disabled. Otherwise resolves the world container and processes every
/// configured world sequentially.
pub fn run(config: &Config, logger: &RunLogger) -> Option<RunSummary> {
    if !config.regen.enabled {
        return None;
    }

    let container = resolve_absolute_path(&config.paths.world_container);
    Some(RegenRunner::new(logger).run(&config.regen, &container))
}

/// Self-disable step, invoked by the adapter after a run completed.
///
/// When `disable_after` is set, flips `enabled` to false and persists the
/// config, so the next triggered run is a no-op until re-enabled manually.
/// Unconditional on per-target success: a partially failed run still
/// disables itself. Returns whether a disable was persisted.
pub fn disable_if_configured(config: &mut Config, logger: &RunLogger) -> Result<bool> {
    if !config.regen.disable_after {
        return Ok(false);
    }

    logger.warning("disable_after is set, disabling regeneration");
    config.regen.enabled = false;
    config.save()?;
    Ok(true)
}
