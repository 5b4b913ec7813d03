// Tab history platform paths
// Only the configuration directory is needed: history itself is never written to disk.
//
// Linux:   $XDG_CONFIG_HOME/tabhistory or ~/.config/tabhistory
// macOS:   ~/Library/Application Support/TabHistory
// Windows: %APPDATA%/TabHistory

use std::env;
use std::path::PathBuf;

/// Returns the platform-specific configuration directory.
#[cfg(target_os = "linux")]
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("tabhistory")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("tabhistory")
    }
}

/// Returns the platform-specific configuration directory.
#[cfg(target_os = "macos")]
pub fn get_config_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
        .join("TabHistory")
}

/// Returns the platform-specific configuration directory.
#[cfg(target_os = "windows")]
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("TabHistory")
}

/// Returns the platform-specific configuration directory.
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn get_config_dir() -> PathBuf {
    env::temp_dir().join("tabhistory")
}
