//! Dialog capture state machine and its building blocks

mod classifier;
mod config;
mod conversation;
mod host;
mod memory;
mod record;
mod sanitize;
pub mod selection;

pub use classifier::{classify, group_id, PendingEvent, PendingEvents};
pub use config::ScraperConfig;
pub use conversation::{ConversationBuilder, ConversationState, PreviousText};
pub use host::{
    Actor, ClientHost, WidgetRef, KEY_DIGIT_1, KEY_DIGIT_6, MENU_ACTION_WIDGET_CONTINUE,
};
pub use memory::{MemoryHost, WidgetState};
pub use record::{build_dialog_entry, build_quest_diary, RecordError};
pub use sanitize::{normalize_multiline, remove_tags, sanitize};
