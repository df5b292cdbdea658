//! Configuration system: TOML file + env var overrides + safe defaults.
//!
//! The config is loaded once by the host adapter, passed into the run as an
//! immutable snapshot, and optionally rewritten afterwards (self-disable).

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, WrbError};

/// Full World Reboot configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub regen: RegenConfig,
    pub paths: PathsConfig,
}

/// What to regenerate and when.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegenConfig {
    /// Master switch — when false, a triggered run is a no-op.
    pub enabled: bool,
    /// Flip `enabled` back to false and persist after a run completes.
    ///
    /// Unconditional on per-target success: a partially failed run still
    /// disables itself, so the next start does not wipe again.
    pub disable_after: bool,
    /// Ordered list of world folder names to empty. Duplicates are processed
    /// redundantly; order determines processing (and log) order.
    pub worlds: Vec<String>,
}

/// Filesystem paths used by worldreboot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub config_file: PathBuf,
    /// Base directory the world folder names resolve under.
    pub world_container: PathBuf,
    pub log_file: PathBuf,
}

impl Default for RegenConfig {
    fn default() -> Self {
        Self {
            // Ships disabled: this tool destroys world data on purpose.
            enabled: false,
            disable_after: false,
            worlds: vec![
                "world".to_string(),
                "world_nether".to_string(),
                "world_the_end".to_string(),
            ],
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let home_dir = env::var_os("HOME").map_or_else(
            || {
                eprintln!(
                    "[WRB-CONFIG] WARNING: HOME not set, falling back to /tmp for data paths"
                );
                PathBuf::from("/tmp")
            },
            PathBuf::from,
        );
        let cfg = home_dir
            .join(".config")
            .join("worldreboot")
            .join("config.toml");
        let data = home_dir.join(".local").join("share").join("worldreboot");
        Self {
            config_file: cfg,
            world_container: PathBuf::from("."),
            log_file: data.join("regen.log"),
        }
    }
}

impl Config {
    /// Default configuration path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathsConfig::default().config_file
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from default path;
    /// defaults are used. An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| WrbError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(WrbError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.paths.config_file = path_buf;
        cfg.apply_env_overrides_from(env_var)?;
        cfg.normalize_paths();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Persist the config back to `paths.config_file`.
    ///
    /// Write-to-temp then atomic rename, so a crash mid-save never leaves a
    /// truncated config behind.
    pub fn save(&self) -> Result<()> {
        let path = &self.paths.config_file;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| WrbError::io(parent, source))?;
        }

        let rendered = toml::to_string_pretty(self)?;

        let tmp_path = path.with_extension("toml.tmp");
        {
            let mut file =
                fs::File::create(&tmp_path).map_err(|source| WrbError::io(&tmp_path, source))?;
            file.write_all(rendered.as_bytes())
                .map_err(|source| WrbError::io(&tmp_path, source))?;
            file.sync_all()
                .map_err(|source| WrbError::io(&tmp_path, source))?;
        }
        fs::rename(&tmp_path, path).map_err(|source| WrbError::io(path, source))?;
        Ok(())
    }

    /// Deterministic hash of the effective config for logging.
    ///
    /// FNV-1a over the canonical JSON rendering, stable across processes and
    /// Rust releases.
    pub fn stable_hash(&self) -> Result<String> {
        let canonical = serde_json::to_string(self)?;
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in canonical.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        Ok(format!("{hash:016x}"))
    }

    /// Apply `WRB_*` env overrides via an injectable lookup (testable without
    /// touching process-global environment).
    fn apply_env_overrides_from<F>(&mut self, mut lookup: F) -> Result<()>
    where
        F: FnMut(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("WRB_ENABLED") {
            self.regen.enabled = parse_env_bool("WRB_ENABLED", &raw)?;
        }
        if let Some(raw) = lookup("WRB_DISABLE_AFTER") {
            self.regen.disable_after = parse_env_bool("WRB_DISABLE_AFTER", &raw)?;
        }
        if let Some(raw) = lookup("WRB_WORLDS") {
            self.regen.worlds = raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(raw) = lookup("WRB_WORLD_CONTAINER") {
            self.paths.world_container = PathBuf::from(raw);
        }
        if let Some(raw) = lookup("WRB_LOG_FILE") {
            self.paths.log_file = PathBuf::from(raw);
        }
        Ok(())
    }

    /// Normalize paths for consistent comparison.
    fn normalize_paths(&mut self) {
        let s = self.paths.world_container.to_string_lossy();
        if s.len() > 1
            && let Some(stripped) = s.strip_suffix('/')
        {
            self.paths.world_container = PathBuf::from(stripped);
        }
    }

    /// Reject configs that could escape the world container.
    ///
    /// World names must be plain folder names: the eraser only ever deletes
    /// inside `container/<name>/...`, and a name carrying separators or dot
    /// components would break that containment.
    fn validate(&self) -> Result<()> {
        for name in &self.regen.worlds {
            if name.is_empty() {
                return Err(WrbError::InvalidConfig {
                    details: "regen.worlds must not contain empty names".to_string(),
                });
            }
            if name == "." || name == ".." {
                return Err(WrbError::InvalidConfig {
                    details: format!("regen.worlds entry {name:?} is not a folder name"),
                });
            }
            if name.contains('/') || name.contains('\\') {
                return Err(WrbError::InvalidConfig {
                    details: format!(
                        "regen.worlds entry {name:?} must not contain path separators"
                    ),
                });
            }
        }

        if self.paths.world_container.as_os_str().is_empty() {
            return Err(WrbError::InvalidConfig {
                details: "paths.world_container must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}

fn parse_env_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(WrbError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: expected a boolean"),
        }),
    }
}
