//! The eraser core: bottom-up recursive deletion and root-content erasure.

pub mod recursive;
pub mod tree;
