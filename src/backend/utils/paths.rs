//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the main application data directory.
const APP_DIR: &str = "LedgerDeck";

/// Environment variable that overrides the data directory. Used by portable
/// installs and by tests that must not touch real profile data.
pub const DATA_DIR_ENV: &str = "LEDGERDECK_DIR";

/// Get the base application data directory (`LedgerDeck`).
#[inline]
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("HOME")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(APP_DIR))
}
