// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Where saved settings live: `$XDG_DATA_HOME/tagwerk`, else
// `~/.local/share/tagwerk`, else the system temp dir.

use std::path::PathBuf;

/// Return the application data directory. It is created on first save.
pub fn data_dir() -> PathBuf {
    base_dir(|key| std::env::var(key).ok()).join("tagwerk")
}

/// Resolve the base data directory from `env`.
///
/// Empty or relative values are ignored, as the XDG base directory rules
/// require, so a blank `XDG_DATA_HOME` never lands settings in the cwd.
fn base_dir(env: impl Fn(&str) -> Option<String>) -> PathBuf {
    let absolute = |key: &str| {
        env(key)
            .map(PathBuf::from)
            .filter(|path| path.is_absolute())
    };

    if let Some(xdg) = absolute("XDG_DATA_HOME") {
        return xdg;
    }
    if let Some(home) = absolute("HOME") {
        return home.join(".local").join("share");
    }
    std::env::temp_dir()
}
