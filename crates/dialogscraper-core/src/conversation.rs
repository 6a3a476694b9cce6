//! Conversation state machine: Idle until the first dialog, Active until
//! the chat input comes back

use dialogscraper_store::{Conversation, DialogEntry, DialogPayload};
use tracing::info;

/// Text that led to the next entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviousText {
    /// Text of a captured line, already sanitized
    Line(String),
    /// The option the player picked, as the client showed it
    Selection(String),
}

impl PreviousText {
    pub fn as_str(&self) -> &str {
        match self {
            PreviousText::Line(text) | PreviousText::Selection(text) => text.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    Active,
}

/// Accumulates the entries of the conversation in progress
#[derive(Debug, Default)]
pub struct ConversationBuilder {
    conversation: Option<Conversation>,
    previous_text: Option<PreviousText>,
}

impl ConversationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConversationState {
        if self.conversation.is_some() {
            ConversationState::Active
        } else {
            ConversationState::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.conversation.is_some()
    }

    /// Start a conversation if none is in progress. Returns true if one was
    /// started.
    pub fn begin(&mut self) -> bool {
        if self.conversation.is_some() {
            return false;
        }
        info!("Conversation started");
        self.conversation = Some(Vec::new());
        true
    }

    pub fn previous_text(&self) -> Option<&PreviousText> {
        self.previous_text.as_ref()
    }

    /// Remember the option the player picked. May happen in any state.
    pub fn record_selection(&mut self, text: String) {
        self.previous_text = Some(PreviousText::Selection(text));
    }

    /// Append an entry, starting a conversation if needed.
    ///
    /// Lines become the previous text of whatever follows; an options menu
    /// clears it until the player's pick is known.
    pub fn push(&mut self, entry: DialogEntry) {
        self.previous_text = match &entry.payload {
            DialogPayload::Player { text, .. } | DialogPayload::Npc { text, .. } => {
                Some(PreviousText::Line(text.clone()))
            }
            DialogPayload::Options { .. } => None,
        };
        self.conversation.get_or_insert_with(Vec::new).push(entry);
    }

    pub fn entries(&self) -> &[DialogEntry] {
        self.conversation.as_deref().unwrap_or_default()
    }

    /// End the conversation, returning its entries and resetting to Idle
    pub fn finish(&mut self) -> Option<Conversation> {
        let conversation = self.conversation.take()?;
        self.previous_text = None;
        Some(conversation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone};

    fn at() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap()
    }

    fn npc(text: &str, previous: Option<&str>) -> DialogEntry {
        DialogEntry {
            payload: DialogPayload::Npc {
                name: "Hans".to_string(),
                text: text.to_string(),
                animation: None,
            },
            previous_text: previous.map(str::to_string),
            timestamp: at(),
        }
    }

    fn options(items: &[&str]) -> DialogEntry {
        DialogEntry {
            payload: DialogPayload::Options {
                options: items.iter().map(|s| s.to_string()).collect(),
            },
            previous_text: None,
            timestamp: at(),
        }
    }

    #[test]
    fn test_begin_only_once() {
        let mut builder = ConversationBuilder::new();
        assert_eq!(builder.state(), ConversationState::Idle);
        assert!(builder.begin());
        assert!(!builder.begin());
        assert_eq!(builder.state(), ConversationState::Active);
    }

    #[test]
    fn test_line_becomes_previous_text() {
        let mut builder = ConversationBuilder::new();
        builder.begin();
        builder.push(npc("Welcome!", None));
        assert_eq!(
            builder.previous_text(),
            Some(&PreviousText::Line("Welcome!".to_string()))
        );
    }

    #[test]
    fn test_options_clear_previous_text_until_selection() {
        let mut builder = ConversationBuilder::new();
        builder.begin();
        builder.push(npc("What do you want?", None));
        builder.push(options(&["A", "B"]));
        assert_eq!(builder.previous_text(), None);

        builder.record_selection("B".to_string());
        assert_eq!(
            builder.previous_text(),
            Some(&PreviousText::Selection("B".to_string()))
        );
        assert_eq!(builder.previous_text().map(PreviousText::as_str), Some("B"));
    }

    #[test]
    fn test_finish_resets() {
        let mut builder = ConversationBuilder::new();
        builder.push(npc("Hi", None));
        assert!(builder.is_active());

        let conversation = builder.finish().unwrap();
        assert_eq!(conversation.len(), 1);
        assert_eq!(builder.state(), ConversationState::Idle);
        assert_eq!(builder.previous_text(), None);
        assert!(builder.entries().is_empty());
        assert!(builder.finish().is_none());
    }

    #[test]
    fn test_entries_keep_their_snapshot() {
        let mut builder = ConversationBuilder::new();
        builder.push(npc("First", Some("Hello")));
        builder.record_selection("Later pick".to_string());
        assert_eq!(builder.entries()[0].previous_text.as_deref(), Some("Hello"));
    }
}
