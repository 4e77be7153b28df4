// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Persisted settings — the consigner ID and preferred label sheet survive
// between runs as pretty-printed JSON.

use std::path::{Path, PathBuf};

use tagwerk_core::AppConfig;
use tagwerk_core::error::Result;
use tracing::{debug, info, warn};

const CONFIG_FILE: &str = "config.json";

/// Full path of the settings file inside `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

/// Load settings, falling back to defaults when the file is missing or
/// unreadable.
pub fn load_config(data_dir: &Path) -> AppConfig {
    let path = config_path(data_dir);
    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(err) => {
            debug!(path = %path.display(), %err, "No saved settings; using defaults");
            return AppConfig::default();
        }
    };
    match serde_json::from_str(&data) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), %err, "Saved settings are corrupt; using defaults");
            AppConfig::default()
        }
    }
}

/// Write settings, creating the data directory if needed.
pub fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let path = config_path(data_dir);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    info!(path = %path.display(), "Settings saved");
    Ok(())
}
