//! Widget-group classification and the per-tick pending event queue

use dialogscraper_store::DialogKind;
use std::collections::BTreeSet;

/// Widget group ids of the client's dialog interfaces
pub mod group_id {
    pub const DIALOG_PLAYER: i32 = 217;
    pub const DIALOG_OPTION: i32 = 219;
    pub const DIALOG_NPC: i32 = 231;
    pub const DIARY_QUEST: i32 = 119;
}

/// Work queued by a widget becoming visible.
///
/// Variant order is the drain order within a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PendingEvent {
    Player,
    Npc,
    Options,
    QuestDiary,
}

impl PendingEvent {
    /// The dialog kind this event produces, if it belongs to a conversation
    pub fn dialog_kind(&self) -> Option<DialogKind> {
        match self {
            PendingEvent::Player => Some(DialogKind::Player),
            PendingEvent::Npc => Some(DialogKind::Npc),
            PendingEvent::Options => Some(DialogKind::Options),
            PendingEvent::QuestDiary => None,
        }
    }
}

/// Map a widget group id to the event it triggers
pub fn classify(group: i32) -> Option<PendingEvent> {
    match group {
        group_id::DIALOG_PLAYER => Some(PendingEvent::Player),
        group_id::DIALOG_NPC => Some(PendingEvent::Npc),
        group_id::DIALOG_OPTION => Some(PendingEvent::Options),
        group_id::DIARY_QUEST => Some(PendingEvent::QuestDiary),
        _ => None,
    }
}

/// Pending events, deduplicated on enqueue and drained in priority order
#[derive(Debug, Clone, Default)]
pub struct PendingEvents {
    events: BTreeSet<PendingEvent>,
}

impl PendingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event. Returns false if it was already pending.
    pub fn push(&mut self, event: PendingEvent) -> bool {
        self.events.insert(event)
    }

    /// Whether any conversation-bearing event is queued
    pub fn has_dialog(&self) -> bool {
        self.events.iter().any(|e| e.dialog_kind().is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Take every pending event, Player first and QuestDiary last
    pub fn drain(&mut self) -> Vec<PendingEvent> {
        std::mem::take(&mut self.events).into_iter().collect()
    }
}
