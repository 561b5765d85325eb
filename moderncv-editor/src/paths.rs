use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.yaml";

pub fn moderncv_root(home: &Path) -> PathBuf {
    home.join(".moderncv")
}

pub fn config_path(home: &Path) -> PathBuf {
    moderncv_root(home).join(CONFIG_FILE)
}

/// Default location for user template overrides.
pub fn templates_dir(home: &Path) -> PathBuf {
    moderncv_root(home).join("templates")
}
