//! Application configuration domain model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
///
/// Contains only the configuration needed by the application layer: where
/// the remote record store lives and where local data is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote record store settings
    pub remote: RemoteConfig,

    /// Local storage settings
    pub storage: StorageConfig,
}

/// Remote record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the destination collection service
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the app data directory; platform default when `None`
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig {
                base_url: "https://travelupa.example.com/api".to_string(),
                timeout_secs: 30,
            },
            storage: StorageConfig { data_dir: None },
        }
    }
}
