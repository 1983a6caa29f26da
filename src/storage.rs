use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::HarmonyError;

/// Root of the app's persistent storage. Every store function takes one of
/// these explicitly instead of reaching for a global path, so tests can
/// point it at a temporary directory.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Platform-specific app data directory.
    pub fn resolve() -> Self {
        #[cfg(target_os = "macos")]
        {
            if let Some(home) = std::env::var_os("HOME") {
                let mut dir = PathBuf::from(home);
                dir.push("Library/Application Support/com.harmony.study");
                return DataDir { root: dir };
            }
        }

        #[cfg(target_os = "windows")]
        {
            if let Some(appdata) = std::env::var_os("APPDATA") {
                let mut dir = PathBuf::from(appdata);
                dir.push("com.harmony.study");
                return DataDir { root: dir };
            }
        }

        #[cfg(target_os = "linux")]
        {
            if let Some(home) = std::env::var_os("HOME") {
                let mut dir = PathBuf::from(home);
                dir.push(".local/share/com.harmony.study");
                return DataDir { root: dir };
            }
        }

        // Fallback
        DataDir {
            root: PathBuf::from("data"),
        }
    }

    /// Use an explicit root instead of the platform default.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        DataDir { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// One plan file per calendar date.
    pub fn plan_path(&self, date: NaiveDate) -> PathBuf {
        self.root.join("plans").join(format!("{}.json", date))
    }
}

/// Read a stored JSON value, treating a missing or unparseable file as
/// absent. Callers fall back to their own defaults.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    match tokio::fs::read_to_string(path).await {
        Ok(data) => match serde_json::from_str::<T>(&data) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    path = ?path,
                    error = %e,
                    "Failed to parse stored JSON, treating as absent"
                );
                None
            }
        },
        Err(e) => {
            tracing::debug!(path = ?path, error = %e, "No stored value");
            None
        }
    }
}

/// Write a JSON value, creating parent directories as needed.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), HarmonyError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| HarmonyError::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(value)
        .map_err(|e| HarmonyError::serialize("stored record", e))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| HarmonyError::io(path, e))?;

    Ok(())
}
