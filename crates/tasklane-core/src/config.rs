use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from an optional TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the board snapshot. Defaults to the platform
    /// data directory when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config| config.join("tasklane/config.toml"))
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    /// Resolve the directory where the board snapshot lives.
    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tasklane")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_data_dir_override() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/tmp/boards")),
        };
        assert_eq!(config.effective_data_dir(), PathBuf::from("/tmp/boards"));
    }

    #[test]
    fn test_default_has_no_override() {
        let config = AppConfig::default();
        assert!(config.data_dir.is_none());
    }
}
