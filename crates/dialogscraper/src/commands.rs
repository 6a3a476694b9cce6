pub mod config;
pub mod replay;
pub mod show;
pub mod version;

use dialogscraper_store::default_save_root;
use std::path::{Path, PathBuf};

/// Explicit config path, or `config.json` under the default save root
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => default_save_root().join("config.json"),
    }
}
