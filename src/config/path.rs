//! Where the configuration file lives

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "ONELOGIN_AWS_CONFIG";

const CONFIG_DIR: &str = ".onelogin-aws-connector";
const CONFIG_FILENAME: &str = "config.toml";

/// Default location: `~/.onelogin-aws-connector/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::NoConfigPath)?;
    Ok(config_path_in(&home))
}

/// Resolve an explicit path (flag or env) or fall back to the default
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => default_config_path(),
    }
}

/// Create the directory holding `path` if it does not exist yet
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    Ok(())
}

fn config_path_in(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR).join(CONFIG_FILENAME)
}
