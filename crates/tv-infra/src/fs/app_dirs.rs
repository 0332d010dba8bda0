use anyhow::{Context, Result};
use std::path::PathBuf;

use tv_core::config::StorageConfig;

/// Get the Travelupa application data root directory.
///
/// Honors the configured override; otherwise the platform default:
/// - macOS: ~/Library/Application Support/Travelupa
/// - Windows: %APPDATA%\Travelupa
/// - Linux: $XDG_DATA_HOME/Travelupa or ~/.local/share/Travelupa
///
/// This function does not create directories; the caller decides when to
/// create them.
pub fn app_data_dir(config: &StorageConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }

    let base_dir = dirs::data_dir()
        .or_else(dirs::home_dir)
        .context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join("Travelupa"))
}

/// Database storage directory
pub fn db_dir(config: &StorageConfig) -> Result<PathBuf> {
    Ok(app_data_dir(config)?.join("db"))
}

/// Durable directory for saved photos. Survives app restarts and is not
/// subject to routine cache eviction.
pub fn photos_dir(config: &StorageConfig) -> Result<PathBuf> {
    Ok(app_data_dir(config)?.join("photos"))
}

/// Ephemeral staging directory for camera captures.
pub fn capture_cache_dir() -> Result<PathBuf> {
    let base_dir = dirs::cache_dir()
        .or_else(dirs::home_dir)
        .context("Failed to get platform-specific cache directory")?;

    Ok(base_dir.join("Travelupa").join("captures"))
}
