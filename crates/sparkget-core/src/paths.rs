//! Install root resolution.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Environment override for the install root.
pub const INSTALL_DIR_ENV: &str = "SPARK_INSTALL_DIR";

/// Subdirectory of the user profile holding all installs.
const INSTALL_SUBDIR: &str = "spark";

/// The directory all version installs live under: `$SPARK_INSTALL_DIR` when
/// set, else the per-user profile directory (`%LOCALAPPDATA%` on Windows,
/// the home directory elsewhere) joined with `spark`. The directory is not
/// created here.
pub fn install_root() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(INSTALL_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let profile = user_profile_dir().context("cannot determine the user profile directory")?;
    Ok(profile.join(INSTALL_SUBDIR))
}

#[cfg(windows)]
fn user_profile_dir() -> Option<PathBuf> {
    dirs::data_local_dir()
}

#[cfg(not(windows))]
fn user_profile_dir() -> Option<PathBuf> {
    dirs::home_dir()
}
