//! Scraper configuration

use dialogscraper_store::default_save_root;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_true() -> bool {
    true
}

/// User-facing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Save each dialog line, with head animations and options
    #[serde(default = "default_true")]
    pub scrape_dialog: bool,

    /// Save the contents of opened quest diaries
    #[serde(default = "default_true")]
    pub scrape_quest_diary: bool,

    /// Root directory for session folders
    #[serde(default = "default_save_root")]
    pub save_path: PathBuf,

    /// Write transcripts on a background thread
    #[serde(default)]
    pub background_flush: bool,
}

impl ScraperConfig {
    pub fn new() -> Self {
        Self {
            scrape_dialog: true,
            scrape_quest_diary: true,
            save_path: default_save_root(),
            background_flush: false,
        }
    }

    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ScraperConfig::new();
        assert!(config.scrape_dialog);
        assert!(config.scrape_quest_diary);
        assert!(!config.background_flush);
        assert!(config.save_path.ends_with("DialogScraper"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = ScraperConfig::load(&temp.path().join("config.json")).unwrap();
        assert_eq!(config, ScraperConfig::new());
    }

    #[test]
    fn test_load_partial_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"scrape_quest_diary": false, "save_path": "/srv/dialogs"}"#)
            .unwrap();

        let config = ScraperConfig::load(&path).unwrap();
        assert!(config.scrape_dialog);
        assert!(!config.scrape_quest_diary);
        assert_eq!(config.save_path, PathBuf::from("/srv/dialogs"));
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert!(ScraperConfig::load(&path).is_err());
    }
}
