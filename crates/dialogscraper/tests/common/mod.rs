#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone};
use dialogscraper_core::{Actor, MemoryHost, ScraperConfig, WidgetRef};
use std::path::Path;

pub fn started_at() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 9, 14, 16, 20, 5)
        .unwrap()
}

pub fn sample_config(save_path: &Path) -> ScraperConfig {
    ScraperConfig {
        scrape_dialog: true,
        scrape_quest_diary: true,
        save_path: save_path.to_path_buf(),
        background_flush: false,
    }
}

pub fn bob_smith() -> Actor {
    Actor::Npc {
        id: 100,
        name: Some("Bob Smith".to_string()),
    }
}

/// Client with a dialog open: chat input hidden, local player "Zezima"
pub fn dialog_host() -> MemoryHost {
    let mut host = MemoryHost::with_local_player("Zezima");
    host.set_hidden(WidgetRef::ChatboxInput, true);
    host
}

pub fn close_chat(host: &mut MemoryHost) {
    host.set_hidden(WidgetRef::ChatboxInput, false);
}

pub fn open_chat(host: &mut MemoryHost) {
    host.set_hidden(WidgetRef::ChatboxInput, true);
}
