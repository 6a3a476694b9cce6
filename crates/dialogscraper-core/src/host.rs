//! The slice of the game client the scraper reads from

use serde::{Deserialize, Serialize};

/// Menu action type of a "Continue" click on a dialog widget
pub const MENU_ACTION_WIDGET_CONTINUE: i32 = 30;

/// Key codes of the digit keys `1` through `6`
pub const KEY_DIGIT_1: i32 = 49;
pub const KEY_DIGIT_6: i32 = 54;

/// Widgets the scraper reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetRef {
    PlayerText,
    PlayerHeadModel,
    NpcName,
    NpcText,
    NpcHeadModel,
    /// Container whose children are the lines of the options menu. Child 0 is
    /// the "Select an Option" title.
    OptionList,
    /// The chat input line, visible again once a dialog chain has ended
    ChatboxInput,
    QuestDiaryTitle,
    QuestDiaryText,
}

/// An actor involved in an interaction change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    LocalPlayer,
    Player { name: String },
    Npc { id: i32, name: Option<String> },
}

/// Read-only snapshot access into the client's current UI.
///
/// Every accessor may report the widget as absent; callers treat that as a
/// transient condition.
pub trait ClientHost {
    fn widget_text(&self, widget: WidgetRef) -> Option<String>;

    /// Text of each child in order. Children without text are reported as
    /// empty strings. For the quest diary text this is the static children.
    fn widget_children(&self, widget: WidgetRef) -> Option<Vec<String>>;

    fn widget_animation_id(&self, widget: WidgetRef) -> Option<i32>;

    /// Absent widgets count as hidden
    fn is_widget_hidden(&self, widget: WidgetRef) -> bool;

    fn local_player_name(&self) -> Option<String>;
}
