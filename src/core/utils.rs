use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".finanzas_core";
const STATE_FILE: &str = "finanzas_v1.json";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.finanzas_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINANZAS_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the single persisted aggregate document within `base`.
pub fn state_file_in(base: &Path) -> PathBuf {
    base.join(STATE_FILE)
}

/// Path of the persisted preferences document within `base`.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Creates the directory when missing.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
