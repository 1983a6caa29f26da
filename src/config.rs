use serde::{Deserialize, Serialize};

use crate::storage::DataDir;

/// Which status newly generated blocks start in. Source revisions of the
/// planner disagreed on this, so it is a config knob: `AllPending` keeps
/// "next" a purely derived query, `FirstActive` marks block 0 up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialStatusPolicy {
    FirstActive,
    AllPending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub initial_status: InitialStatusPolicy,
    /// "HH:MM" start used when a quick-added block has no predecessor to
    /// chain its scheduled time from.
    pub day_start: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            initial_status: InitialStatusPolicy::AllPending,
            day_start: "09:00".to_string(),
        }
    }
}

/// Load config.toml from the data directory, falling back to defaults when
/// the file is missing or malformed.
pub async fn load_config(data: &DataDir) -> AppConfig {
    let path = data.file("config.toml");
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => match toml::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "Failed to parse config.toml, using defaults");
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}
