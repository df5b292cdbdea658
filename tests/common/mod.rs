use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Lay out a tree of files under `root`: each entry is a relative path, with
/// parents created as needed.
pub fn write_tree(root: &Path, files: &[&str]) {
    for rel in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture parents");
        }
        fs::write(&path, "fixture data").expect("write fixture file");
    }
}

pub fn dir_entry_count(path: &Path) -> usize {
    fs::read_dir(path).map(|it| it.count()).unwrap_or(0)
}

/// Write a worldreboot config file pointing at `container`, return its path.
pub fn write_config(
    dir: &Path,
    container: &Path,
    worlds: &[&str],
    enabled: bool,
    disable_after: bool,
) -> PathBuf {
    let config_path = dir.join("config.toml");
    let log_path = dir.join("regen.log");
    let worlds_toml: Vec<String> = worlds.iter().map(|w| format!("{w:?}")).collect();
    let rendered = format!(
        r#"
[regen]
enabled = {enabled}
disable_after = {disable_after}
worlds = [{}]

[paths]
world_container = {:?}
log_file = {:?}
"#,
        worlds_toml.join(", "),
        container.display().to_string(),
        log_path.display().to_string(),
    );
    fs::write(&config_path, rendered).expect("write config fixture");
    config_path
}

pub fn read_log(dir: &Path) -> String {
    fs::read_to_string(dir.join("regen.log")).unwrap_or_default()
}

fn resolve_bin_path() -> PathBuf {
    if let Some(path) = option_env!("CARGO_BIN_EXE_worldreboot") {
        return PathBuf::from(path);
    }

    let exe_name = if cfg!(windows) {
        "worldreboot.exe"
    } else {
        "worldreboot"
    };
    let fallback = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .and_then(|deps| deps.parent().map(PathBuf::from))
        .map(|debug_dir| debug_dir.join(exe_name));

    match fallback {
        Some(path) if path.exists() => path,
        _ => panic!("unable to resolve worldreboot binary path for integration test"),
    }
}

/// Run the worldreboot adapter with the given config file.
pub fn run_adapter(config_path: &Path) -> Output {
    Command::new(resolve_bin_path())
        .env("WRB_CONFIG", config_path)
        .env("RUST_BACKTRACE", "1")
        .output()
        .expect("execute worldreboot")
}
