//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use world_reboot::prelude::*;
//! ```

// Core
pub use crate::core::config::{Config, PathsConfig, RegenConfig};
pub use crate::core::errors::{Result, WrbError};
pub use crate::core::paths::{resolve_absolute_path, world_root};

// Eraser
pub use crate::eraser::recursive::RecursiveDeleter;
pub use crate::eraser::tree::TreeEraser;

// Host
pub use crate::host::{RegenRunner, RunSummary, TargetOutcome, disable_if_configured, run};

// Logger
pub use crate::logger::lines::{RunLogger, Severity};
