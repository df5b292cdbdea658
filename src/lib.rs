#![forbid(unsafe_code)]

//! World Reboot — host-triggered world folder regeneration.
//!
//! Empties each configured world folder's contents (files and
//! subdirectories) while preserving the folder itself, so the game server
//! rebuilds the world on its next start. Deletion is bottom-up and
//! best-effort: one undeletable node never aborts the rest of the run, it is
//! logged and counted against the target's outcome.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use world_reboot::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use world_reboot::core::config::Config;
//! use world_reboot::eraser::tree::TreeEraser;
//! ```

pub mod prelude;

pub mod core;
pub mod eraser;
pub mod host;
pub mod logger;
