// SPDX-License-Identifier: MPL-2.0
//! Preference-store path resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`] (for tests)
//! 2. **Environment variable** (`LOCALE_BRIDGE_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate, with the app name appended:
//!    - Linux: `~/.config/locale-bridge/`
//!    - macOS: `~/Library/Application Support/locale-bridge/`
//!    - Windows: `C:\Users\<User>\AppData\Roaming\locale-bridge\`

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "locale-bridge";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LOCALE_BRIDGE_CONFIG_DIR";

/// Returns the directory holding the preference store.
///
/// Returns `None` if the platform config directory cannot be determined
/// (rare edge case).
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the preference-store directory with an optional override.
///
/// The explicit override has highest priority because it is the most
/// specific - when code explicitly passes a path, it should always be
/// respected.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
