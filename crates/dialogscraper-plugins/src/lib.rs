//! Capture plugins driven by client callbacks

pub mod base;
pub mod dialog;
pub mod quest_diary;
pub mod registry;
pub mod scraper;

pub use base::ScraperPlugin;
pub use dialog::DialogPlugin;
pub use quest_diary::QuestDiaryPlugin;
pub use registry::PluginRegistry;
pub use scraper::DialogScraper;
