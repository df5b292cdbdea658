//! The regeneration run: one sequential pass over the configured targets.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::core::config::RegenConfig;
use crate::core::paths::world_root;
use crate::eraser::tree::TreeEraser;
use crate::logger::lines::RunLogger;

/// Outcome for one configured world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    /// Configured world folder name.
    pub world: String,
    /// Whether every node under the world root was deleted.
    pub success: bool,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Per-target outcomes, in configured order.
    pub targets: Vec<TargetOutcome>,
    /// Wall-clock time of the whole loop.
    pub duration: Duration,
}

impl RunSummary {
    /// True when every configured target was fully erased.
    #[must_use]
    pub fn fully_succeeded(&self) -> bool {
        self.targets.iter().all(|t| t.success)
    }

    /// Number of targets with at least one failure.
    #[must_use]
    pub fn failed_targets(&self) -> usize {
        self.targets.iter().filter(|t| !t.success).count()
    }
}

/// Drives one run: resolves each world name under the container and empties
/// its folder, strictly sequentially, never aborting the remaining targets
/// when one fails.
pub struct RegenRunner<'a> {
    logger: &'a RunLogger,
}

impl<'a> RegenRunner<'a> {
    /// Runner that reports progress and failures through `logger`.
    pub fn new(logger: &'a RunLogger) -> Self {
        Self { logger }
    }

    /// Process every configured world in order.
    ///
    /// Logs a warning before each target and a severe summary line for each
    /// target that could not be fully regenerated. Per-node detail has
    /// already been logged by the eraser at that point.
    pub fn run(&self, regen: &RegenConfig, container: &Path) -> RunSummary {
        let start = Instant::now();
        let eraser = TreeEraser::new(self.logger);
        let mut targets = Vec::with_capacity(regen.worlds.len());

        for world in &regen.worlds {
            self.logger.warning(format!("regenerating world: {world}"));

            let root = world_root(container, world);
            let success = eraser.erase_contents(&root);
            if !success {
                self.logger
                    .severe(format!("failed to fully regenerate world: {world}"));
            }

            targets.push(TargetOutcome {
                world: world.clone(),
                success,
            });
        }

        RunSummary {
            targets,
            duration: start.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    fn regen_for(worlds: &[&str]) -> RegenConfig {
        RegenConfig {
            enabled: true,
            disable_after: false,
            worlds: worlds.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn empties_each_configured_world() {
        let dir = tempfile::tempdir().unwrap();
        for world in ["alpha", "beta"] {
            fs::create_dir_all(dir.path().join(world).join("sub")).unwrap();
            fs::write(dir.path().join(world).join("x.txt"), "x").unwrap();
        }

        let logger = RunLogger::to_stderr();
        let summary = RegenRunner::new(&logger).run(&regen_for(&["alpha", "beta"]), dir.path());

        assert!(summary.fully_succeeded());
        assert_eq!(summary.failed_targets(), 0);
        for world in ["alpha", "beta"] {
            let root = dir.path().join(world);
            assert!(root.is_dir());
            assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
        }
    }

    #[test]
    fn missing_world_is_success_and_stays_missing() {
        let dir = tempfile::tempdir().unwrap();

        let logger = RunLogger::to_stderr();
        let summary = RegenRunner::new(&logger).run(&regen_for(&["beta"]), dir.path());

        assert!(summary.fully_succeeded());
        assert!(!dir.path().join("beta").exists());
    }

    #[test]
    fn outcomes_preserve_configured_order_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();

        let logger = RunLogger::to_stderr();
        let summary =
            RegenRunner::new(&logger).run(&regen_for(&["alpha", "alpha", "beta"]), dir.path());

        let worlds: Vec<&str> = summary.targets.iter().map(|t| t.world.as_str()).collect();
        assert_eq!(worlds, vec!["alpha", "alpha", "beta"]);
        assert!(summary.fully_succeeded());
    }

    #[test]
    fn log_records_each_target_before_erasure() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("regen.log");
        fs::create_dir(dir.path().join("alpha")).unwrap();

        let logger = RunLogger::open(&log_path);
        RegenRunner::new(&logger).run(&regen_for(&["alpha"]), dir.path());
        drop(logger);

        let contents = fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("regenerating world: alpha"), "{contents}");
        assert!(!contents.contains("SEVERE"), "{contents}");
    }
}
