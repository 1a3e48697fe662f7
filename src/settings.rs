//! Settings the surrounding application persists for the core.
//!
//! The core never owns a persistence format; it reads a flat key/value
//! store through the [`SettingsStore`] trait at scheduler-start and scan
//! time. [`MemorySettings`] backs tests and embedders without persistence.

use std::path::PathBuf;

use crate::models::RefreshConfig;

/// Interval used when the store has nothing configured.
pub const DEFAULT_INTERVAL_SECONDS: u64 = 60;

/// Flat key/value settings owned by the application; the core only reads.
pub trait SettingsStore {
    /// The wallpaper directory the user picked, if any.
    fn selected_directory(&self) -> Option<PathBuf>;

    /// Custom refresh interval in seconds, if one was entered.
    fn refresh_interval_seconds(&self) -> Option<u64>;

    /// Named preset interval, if one is active. A preset wins over a
    /// custom value.
    fn preset_interval_seconds(&self) -> Option<u64> {
        None
    }
}

/// Resolves the effective refresh interval: preset first, then the custom
/// value, then the default.
pub fn effective_interval(store: &dyn SettingsStore) -> u64 {
    store
        .preset_interval_seconds()
        .or_else(|| store.refresh_interval_seconds())
        .unwrap_or(DEFAULT_INTERVAL_SECONDS)
}

/// Snapshots the store into a [`RefreshConfig`]. An empty stored directory
/// counts as "nothing selected".
pub fn config_from_store(store: &dyn SettingsStore) -> RefreshConfig {
    RefreshConfig {
        directory: store
            .selected_directory()
            .filter(|d| !d.as_os_str().is_empty()),
        interval_seconds: effective_interval(store),
        ..Default::default()
    }
}

/// In-memory settings store.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    pub selected_directory: Option<PathBuf>,
    pub refresh_interval_seconds: Option<u64>,
    pub preset_interval_seconds: Option<u64>,
}

impl SettingsStore for MemorySettings {
    fn selected_directory(&self) -> Option<PathBuf> {
        self.selected_directory.clone()
    }

    fn refresh_interval_seconds(&self) -> Option<u64> {
        self.refresh_interval_seconds
    }

    fn preset_interval_seconds(&self) -> Option<u64> {
        self.preset_interval_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_wins_over_custom() {
        let store = MemorySettings {
            refresh_interval_seconds: Some(300),
            preset_interval_seconds: Some(30),
            ..Default::default()
        };
        assert_eq!(effective_interval(&store), 30);
    }

    #[test]
    fn test_custom_when_no_preset() {
        let store = MemorySettings {
            refresh_interval_seconds: Some(300),
            ..Default::default()
        };
        assert_eq!(effective_interval(&store), 300);
    }

    #[test]
    fn test_default_when_unset() {
        let store = MemorySettings::default();
        assert_eq!(effective_interval(&store), DEFAULT_INTERVAL_SECONDS);
    }

    #[test]
    fn test_config_from_store() {
        let store = MemorySettings {
            selected_directory: Some(PathBuf::from("/home/user/wallpapers")),
            refresh_interval_seconds: Some(120),
            ..Default::default()
        };
        let config = config_from_store(&store);
        assert!(config.is_ready());
        assert_eq!(config.interval_seconds, 120);
    }

    #[test]
    fn test_empty_stored_directory_is_none() {
        let store = MemorySettings {
            selected_directory: Some(PathBuf::new()),
            ..Default::default()
        };
        let config = config_from_store(&store);
        assert!(config.directory.is_none());
        assert!(!config.is_ready());
    }
}
