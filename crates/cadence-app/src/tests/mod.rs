use std::path::PathBuf;

use cadence_config::Config;

use crate::state::AppState;

mod command_tests;

pub(crate) fn state() -> AppState {
    AppState::new(Config::default()).unwrap()
}

/// Write `contents` to a per-process temp file
pub(crate) fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cadence-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}
