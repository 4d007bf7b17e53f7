/// Runtime options for a fixer run. The replacement table and the
/// structural patterns stay compiled into the binary; the config only
/// carries the knobs that vary between projects.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::pipeline::PassKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixerConfig {
    /// Scope of the screens pass, relative to the project root.
    #[serde(default = "default_screens_dir")]
    pub screens_dir: String,

    /// Scope of the full-source pass, relative to the project root.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// File extension the walker accepts.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Keep a timestamped copy of each file before overwriting it.
    #[serde(default)]
    pub backup: bool,
}

fn default_screens_dir() -> String {
    "lib/screens".to_string()
}

fn default_source_dir() -> String {
    "lib".to_string()
}

fn default_extension() -> String {
    "dart".to_string()
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            screens_dir: default_screens_dir(),
            source_dir: default_source_dir(),
            extension: default_extension(),
            backup: false,
        }
    }
}

impl FixerConfig {
    pub fn subdir_for(&self, kind: PassKind) -> &str {
        match kind {
            PassKind::Screens => &self.screens_dir,
            PassKind::FullSource => &self.source_dir,
        }
    }

    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        serde_json::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Save configuration to a JSON file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FixerConfig::default();
        assert_eq!(config.screens_dir, "lib/screens");
        assert_eq!(config.source_dir, "lib");
        assert_eq!(config.extension, "dart");
        assert!(!config.backup);
    }

    #[test]
    fn test_subdir_per_pass() {
        let config = FixerConfig::default();
        assert_eq!(config.subdir_for(PassKind::Screens), "lib/screens");
        assert_eq!(config.subdir_for(PassKind::FullSource), "lib");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FixerConfig = serde_json::from_str(r#"{"backup": true}"#).unwrap();
        assert!(config.backup);
        assert_eq!(config.screens_dir, "lib/screens");
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixer.json");

        let mut config = FixerConfig::default();
        config.backup = true;
        config.to_json_file(&path).unwrap();

        let loaded = FixerConfig::from_json_file(&path).unwrap();
        assert!(loaded.backup);
        assert_eq!(loaded.extension, config.extension);
    }
}
