//! Plain-text run logging with graceful degradation.

pub mod lines;
