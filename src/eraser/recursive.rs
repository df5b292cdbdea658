//! Bottom-up recursive deletion of a single path and everything beneath it.
//!
//! The full node set is enumerated first (top-down, lexical order), then
//! deletion is attempted in the reverse of that order so every node goes
//! after all of its descendants. Each attempt is independent: one failing
//! node never blocks the rest, it only pins its ancestors (their removal
//! fails on non-empty, which is expected and recorded, not retried).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::errors::WrbError;
use crate::logger::lines::RunLogger;

/// Deletes a filesystem path and, if it is a directory, every descendant.
pub struct RecursiveDeleter<'a> {
    logger: &'a RunLogger,
}

impl<'a> RecursiveDeleter<'a> {
    /// Deleter that reports failures through `logger`.
    pub fn new(logger: &'a RunLogger) -> Self {
        Self { logger }
    }

    /// Delete `path` and everything beneath it, deepest nodes first.
    ///
    /// Returns `true` only if every node was deleted. A failed node is logged
    /// (one severe record per node, with path and OS error message) and the
    /// remaining nodes are still attempted. If enumeration itself fails the
    /// partially discovered entries are abandoned: nothing is deleted, one
    /// severe record is emitted, and the result is `false`.
    pub fn delete_recursively(&self, path: &Path) -> bool {
        let nodes = match collect_nodes(path) {
            Ok(nodes) => nodes,
            Err(err) => {
                self.logger.severe(err.to_string());
                return false;
            }
        };

        let mut success = true;
        for node in nodes.iter().rev() {
            if let Err(err) = delete_node(node) {
                self.logger.severe(err.to_string());
                success = false;
            }
        }
        success
    }
}

/// Enumerate `path` and all nodes beneath it in top-down lexical pre-order.
///
/// Reversing the result yields a valid bottom-up deletion order. Symlinks are
/// recorded as single nodes and never followed. Any enumeration error aborts
/// the whole walk.
pub(crate) fn collect_nodes(path: &Path) -> Result<Vec<PathBuf>, WrbError> {
    let mut nodes = Vec::new();
    push_subtree(path, &mut nodes)?;
    Ok(nodes)
}

fn push_subtree(path: &Path, nodes: &mut Vec<PathBuf>) -> Result<(), WrbError> {
    let meta =
        fs::symlink_metadata(path).map_err(|source| WrbError::enumeration(path, source))?;
    nodes.push(path.to_path_buf());

    if meta.is_dir() {
        let mut children = fs::read_dir(path)
            .and_then(|entries| {
                entries
                    .map(|entry| entry.map(|e| e.path()))
                    .collect::<io::Result<Vec<_>>>()
            })
            .map_err(|source| WrbError::enumeration(path, source))?;
        children.sort();
        for child in &children {
            push_subtree(child, nodes)?;
        }
    }
    Ok(())
}

/// Delete one node: `remove_dir` for directories (empty by the time we reach
/// them in bottom-up order, unless a descendant's deletion failed or a racing
/// writer added an entry), `remove_file` for everything else including
/// symlinks.
fn delete_node(path: &Path) -> Result<(), WrbError> {
    let meta = fs::symlink_metadata(path).map_err(|source| WrbError::deletion(path, source))?;
    let result = if meta.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|source| WrbError::deletion(path, source))
}
