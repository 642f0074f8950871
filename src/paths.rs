//! XDG-style location of the configuration directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "askbar";

/// Returns the configuration directory for askbar.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/askbar` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/askbar` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME").filter(|xdg| !xdg.is_empty()) {
        Some(xdg) => Ok(PathBuf::from(xdg).join(APP_DIR)),
        None => {
            let home = dirs::home_dir().context("Failed to determine home directory")?;
            Ok(home.join(".config").join(APP_DIR))
        }
    }
}
