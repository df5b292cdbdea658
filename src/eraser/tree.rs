//! Erase the contents of a world root without removing the root itself.
//!
//! The root folder is preserved because the host may keep identity files
//! there (the original server writes uid files into the world folder on
//! initialization) and because "does not exist yet" must stay a no-op.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::errors::WrbError;
use crate::eraser::recursive::RecursiveDeleter;
use crate::logger::lines::RunLogger;

/// Empties a root directory's contents, preserving the directory.
pub struct TreeEraser<'a> {
    logger: &'a RunLogger,
}

impl<'a> TreeEraser<'a> {
    /// Eraser that reports failures through `logger`.
    pub fn new(logger: &'a RunLogger) -> Self {
        Self { logger }
    }

    /// Delete every immediate entry of `root` and its subtree.
    ///
    /// A root that does not exist or is not a directory is trivial success:
    /// there is nothing to delete. Each entry is erased independently and the
    /// overall result is the logical AND of the per-entry results, with no
    /// short-circuit. If listing the root itself fails, one severe record is
    /// emitted and no deletions are attempted.
    pub fn erase_contents(&self, root: &Path) -> bool {
        if !root.is_dir() {
            return true;
        }

        let entries = match list_entries(root) {
            Ok(entries) => entries,
            Err(err) => {
                self.logger.severe(err.to_string());
                return false;
            }
        };

        let deleter = RecursiveDeleter::new(self.logger);
        let mut success = true;
        for entry in &entries {
            if !deleter.delete_recursively(entry) {
                success = false;
            }
        }
        success
    }
}

/// List the immediate entries of `root` in lexical order, so processing (and
/// log) order is deterministic.
fn list_entries(root: &Path) -> Result<Vec<PathBuf>, WrbError> {
    let mut entries = fs::read_dir(root)
        .and_then(|iter| {
            iter.map(|entry| entry.map(|e| e.path()))
                .collect::<io::Result<Vec<_>>>()
        })
        .map_err(|source| WrbError::enumeration(root, source))?;
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn stderr_logger() -> RunLogger {
        RunLogger::to_stderr()
    }

    #[test]
    fn empties_root_but_preserves_it() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("world");
        fs::create_dir_all(root.join("region").join("poi")).unwrap();
        fs::write(root.join("level.dat"), "nbt").unwrap();
        fs::write(root.join("region").join("r.0.0.mca"), "chunk").unwrap();

        let logger = stderr_logger();
        assert!(TreeEraser::new(&logger).erase_contents(&root));
        assert!(root.is_dir(), "root itself must survive");
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn nonexistent_root_is_trivial_success() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("world_the_end");

        let logger = stderr_logger();
        assert!(TreeEraser::new(&logger).erase_contents(&root));
        assert!(!root.exists());
    }

    #[test]
    fn non_directory_root_is_trivial_success() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("world");
        fs::write(&root, "a file, not a folder").unwrap();

        let logger = stderr_logger();
        assert!(TreeEraser::new(&logger).erase_contents(&root));
        assert!(root.exists(), "a non-directory root is left alone");
    }

    #[test]
    fn second_erase_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("world");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("level.dat"), "nbt").unwrap();

        let logger = stderr_logger();
        let eraser = TreeEraser::new(&logger);
        assert!(eraser.erase_contents(&root));
        assert!(eraser.erase_contents(&root));
        assert!(root.is_dir());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn empty_root_stays_empty() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("world_nether");
        fs::create_dir(&root).unwrap();

        let logger = stderr_logger();
        assert!(TreeEraser::new(&logger).erase_contents(&root));
        assert!(root.is_dir());
    }

    // Arbitrary small trees: a set of relative file paths with 1..=3 lexical
    // name components.
    fn relative_paths() -> impl Strategy<Value = Vec<Vec<String>>> {
        let component = "[a-c]{1,3}";
        prop::collection::vec(prop::collection::vec(component, 1..=3), 1..8)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn erases_arbitrary_trees_completely(paths in relative_paths()) {
            let dir = tempfile::tempdir().unwrap();
            let root = dir.path().join("world");
            fs::create_dir(&root).unwrap();

            for components in &paths {
                let mut p = root.clone();
                for c in components {
                    p.push(c);
                }
                // A previously created path may now be needed as a directory
                // (or vice versa); skip the conflicting entry, the tree is
                // arbitrary anyway.
                if let Some(parent) = p.parent()
                    && fs::create_dir_all(parent).is_ok()
                {
                    let _ = fs::write(&p, "x");
                }
            }

            let logger = RunLogger::to_stderr();
            prop_assert!(TreeEraser::new(&logger).erase_contents(&root));
            prop_assert!(root.is_dir());
            prop_assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
        }
    }
}
