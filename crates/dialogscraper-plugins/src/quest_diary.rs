//! Quest Diary Plugin - Saves the text of opened quest journals

use dialogscraper_core::{
    build_quest_diary, classify, ClientHost, PendingEvent, PendingEvents, ScraperConfig,
};
use dialogscraper_store::SessionStore;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::base::{now, ScraperPlugin};

pub struct QuestDiaryPlugin {
    name: String,
    pending: PendingEvents,
    store: Arc<SessionStore>,
    pages_saved: usize,
}

impl QuestDiaryPlugin {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            name: "quest-diary".to_string(),
            pending: PendingEvents::new(),
            store,
            pages_saved: 0,
        }
    }

    pub fn pages_saved(&self) -> usize {
        self.pages_saved
    }
}

impl ScraperPlugin for QuestDiaryPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Save the information inside the quest diary"
    }

    fn is_enabled(&self, config: &ScraperConfig) -> bool {
        config.scrape_quest_diary
    }

    fn on_start(&mut self) -> Option<String> {
        Some("QuestDiary: Active (quest journal capture)".to_string())
    }

    fn on_tick(&mut self, host: &dyn ClientHost) {
        if self.pending.drain().is_empty() {
            return;
        }

        let record = match build_quest_diary(host, now()) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping quest diary: {}", e);
                return;
            }
        };

        match self.store.append_quest_diary(&record) {
            Ok(path) => {
                self.pages_saved += 1;
                info!(
                    quest = %record.name,
                    lines = record.lines.len(),
                    path = %path.display(),
                    "Quest diary collected"
                );
            }
            Err(e) => error!(quest = %record.name, "Failed to save quest diary: {}", e),
        }
    }

    fn on_widget_loaded(&mut self, group_id: i32) {
        if classify(group_id) == Some(PendingEvent::QuestDiary) {
            self.pending.push(PendingEvent::QuestDiary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use dialogscraper_core::{group_id, MemoryHost, WidgetRef, WidgetState};
    use dialogscraper_store::{read_jsonl, QuestDiaryRecord};

    fn setup() -> (tempfile::TempDir, QuestDiaryPlugin) {
        let temp = tempfile::TempDir::new().unwrap();
        let started = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 4, 4, 10, 0, 0)
            .unwrap();
        let store = SessionStore::create(temp.path(), &started).unwrap();
        (temp, QuestDiaryPlugin::new(Arc::new(store)))
    }

    fn diary_host() -> MemoryHost {
        let mut host = MemoryHost::with_local_player("Zezima");
        host.set_widget(WidgetRef::QuestDiaryTitle, WidgetState::text("Rune Mysteries"));
        host.set_widget(
            WidgetRef::QuestDiaryText,
            WidgetState::children(["Zezima should talk to Duke Horacio.", "  "]),
        );
        host
    }

    #[test]
    fn test_diary_saved_once_per_tick() {
        let (_temp, mut plugin) = setup();
        let host = diary_host();

        plugin.on_widget_loaded(group_id::DIARY_QUEST);
        plugin.on_widget_loaded(group_id::DIARY_QUEST);
        plugin.on_tick(&host);
        plugin.on_tick(&host);

        assert_eq!(plugin.pages_saved(), 1);
        let records: Vec<QuestDiaryRecord> =
            read_jsonl(&plugin.store.paths().quest_diary_file()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Rune Mysteries");
        assert_eq!(records[0].lines, vec!["%USERNAME% should talk to Duke Horacio."]);
    }

    #[test]
    fn test_dialog_groups_ignored() {
        let (_temp, mut plugin) = setup();
        let host = diary_host();

        plugin.on_widget_loaded(group_id::DIALOG_NPC);
        plugin.on_tick(&host);

        assert_eq!(plugin.pages_saved(), 0);
    }

    #[test]
    fn test_missing_widgets_skip_page() {
        let (_temp, mut plugin) = setup();
        plugin.on_widget_loaded(group_id::DIARY_QUEST);
        plugin.on_tick(&MemoryHost::new());
        assert_eq!(plugin.pages_saved(), 0);
    }
}
