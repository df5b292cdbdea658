//! Path resolution for the world container and its targets.

use std::env;
use std::path::{Component, Path, PathBuf};

/// Resolve the world container to an absolute, normalized path.
///
/// If `fs::canonicalize` succeeds (path exists), it is used to resolve
/// symlinks and normalize components. If it fails (e.g. the container does
/// not exist yet), the path is made absolute relative to CWD and `..`/`.`
/// components are resolved syntactically.
pub fn resolve_absolute_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };

    if let Ok(canonical) = std::fs::canonicalize(&absolute) {
        return canonical;
    }

    normalize_syntactic(&absolute)
}

/// Resolve a configured world name to its root folder under the container.
///
/// The caller guarantees (via config validation) that `name` is a plain
/// folder name, so the result never escapes `container`. Everything the
/// eraser deletes lives strictly beneath this path; the path itself is
/// preserved.
pub fn world_root(container: &Path, name: &str) -> PathBuf {
    container.join(name)
}

fn normalize_syntactic(path: &Path) -> PathBuf {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir | Component::Normal(_) => {
                components.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if let Some(Component::Normal(_)) = components.last() {
                    components.pop();
                }
            }
        }
    }
    components.into_iter().collect()
}
