use std::path::PathBuf;
use std::time::Duration;

/// Configuration the refresh pipeline reads on every tick.
///
/// Created and updated by user interaction (folder pick, interval pick);
/// persistence belongs to the surrounding application.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Directory to scan. `None` until the user picks one; a tick with no
    /// directory does nothing observable.
    pub directory: Option<PathBuf>,
    /// Seconds between refresh cycles.
    pub interval_seconds: u64,
    /// Target box (width, height) each thumbnail is scaled to fit within.
    pub thumbnail_size: (u32, u32),
    /// Maximum number of thumbnails per cycle.
    pub limit: Option<usize>,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            directory: None,
            interval_seconds: 60,
            thumbnail_size: (128, 128),
            limit: Some(24),
        }
    }
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    /// Whether a refresh cycle has anything to do.
    pub fn is_ready(&self) -> bool {
        self.directory
            .as_deref()
            .is_some_and(|d| !d.as_os_str().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_not_ready() {
        let config = RefreshConfig::default();
        assert!(!config.is_ready());
        assert_eq!(config.interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_empty_directory_not_ready() {
        let config = RefreshConfig {
            directory: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(!config.is_ready());

        let config = RefreshConfig {
            directory: Some(PathBuf::from("/pics")),
            ..Default::default()
        };
        assert!(config.is_ready());
    }
}
