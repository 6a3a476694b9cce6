//! Path resolution for session files

use chrono::{DateTime, FixedOffset};
use std::path::{Path, PathBuf};

use crate::types::NpcRef;

const DEFAULT_DIR_NAME: &str = "DialogScraper";
const QUEST_DIARY_FILE: &str = "quest_diary.jsonl";

/// Default save root: `~/DialogScraper`, or a relative `DialogScraper` when
/// no home directory is known
pub fn default_save_root() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(DEFAULT_DIR_NAME),
        None => PathBuf::from(DEFAULT_DIR_NAME),
    }
}

/// Transcript file name for an NPC: `{id}_{name}.json` with the name
/// lower-cased and spaces replaced by underscores
pub fn transcript_file_name(npc: &NpcRef) -> String {
    let name = npc
        .name
        .replace([' ', '/', '\\'], "_")
        .to_lowercase();
    format!("{}_{}.json", npc.id, name)
}

/// Resolves the paths of one scraping session
#[derive(Debug, Clone)]
pub struct SessionPaths {
    pub save_root: PathBuf,
    pub session_dir: PathBuf,
}

impl SessionPaths {
    /// Session directory named after the start time with second resolution
    pub fn new(save_root: &Path, started_at: &DateTime<FixedOffset>) -> Self {
        let session_name = started_at.format("%Y%m%d%H%M%S").to_string();
        Self {
            save_root: save_root.to_path_buf(),
            session_dir: save_root.join(session_name),
        }
    }

    /// Get the transcript path for an NPC
    pub fn transcript_file(&self, npc: &NpcRef) -> PathBuf {
        self.session_dir.join(transcript_file_name(npc))
    }

    /// Get quest_diary.jsonl path
    pub fn quest_diary_file(&self) -> PathBuf {
        self.session_dir.join(QUEST_DIARY_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn started_at() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 42)
            .unwrap()
    }

    #[test]
    fn test_session_dir_named_by_start_time() {
        let paths = SessionPaths::new(Path::new("/tmp/scrapes"), &started_at());
        assert_eq!(paths.session_dir, PathBuf::from("/tmp/scrapes/20240309070542"));
    }

    #[test]
    fn test_transcript_file_name() {
        let npc = NpcRef::new(100, "Bob Smith");
        assert_eq!(transcript_file_name(&npc), "100_bob_smith.json");
    }

    #[test]
    fn test_transcript_file_name_strips_separators() {
        let npc = NpcRef::new(7, "Sir/Amik Varze");
        assert_eq!(transcript_file_name(&npc), "7_sir_amik_varze.json");
    }

    #[test]
    fn test_quest_diary_file() {
        let paths = SessionPaths::new(Path::new("/tmp/scrapes"), &started_at());
        assert!(paths.quest_diary_file().ends_with("20240309070542/quest_diary.jsonl"));
    }

    #[test]
    fn test_default_save_root() {
        assert!(default_save_root().ends_with("DialogScraper"));
    }
}
