#![forbid(unsafe_code)]

//! worldreboot — thin host adapter around the regeneration core.
//!
//! Stands in for the game server's lifecycle hook: invoked once at start,
//! takes no arguments. Config path comes from `WRB_CONFIG` (default:
//! `~/.config/worldreboot/config.toml`); everything else is configuration.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use world_reboot::core::config::Config;
use world_reboot::core::errors::Result;
use world_reboot::host;
use world_reboot::logger::lines::RunLogger;

fn main() -> ExitCode {
    match run_once() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("worldreboot: {e}");
            ExitCode::FAILURE
        }
    }
}

/// One triggered run. Returns whether it completed without target failures
/// (a disabled config counts as success: nothing to do).
fn run_once() -> Result<bool> {
    let config_path = env::var_os("WRB_CONFIG").map(PathBuf::from);
    let mut config = Config::load(config_path.as_deref())?;

    let logger = RunLogger::open(&config.paths.log_file);
    logger.info(format!(
        "worldreboot {} starting, config hash {}",
        env!("CARGO_PKG_VERSION"),
        config.stable_hash()?
    ));

    let Some(summary) = host::run(&config, &logger) else {
        logger.info("regeneration disabled, nothing to do");
        return Ok(true);
    };

    logger.info(format!(
        "run complete: {} target(s), {} failed, {} ms",
        summary.targets.len(),
        summary.failed_targets(),
        summary.duration.as_millis()
    ));

    // Self-disable happens even when targets failed, so the next start does
    // not wipe again.
    host::disable_if_configured(&mut config, &logger)?;

    Ok(summary.fully_succeeded())
}
