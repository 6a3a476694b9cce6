//! In-memory client used by the replay harness and tests

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::host::{ClientHost, WidgetRef};

/// State of one widget in a [`MemoryHost`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetState {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<String>>,
    #[serde(default)]
    pub animation: Option<i32>,
    #[serde(default)]
    pub hidden: bool,
}

impl WidgetState {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn children<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            children: Some(children.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    pub fn animation(animation: i32) -> Self {
        Self {
            animation: Some(animation),
            ..Default::default()
        }
    }

    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Default::default()
        }
    }
}

/// A scripted client UI
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    widgets: HashMap<WidgetRef, WidgetState>,
    local_player: Option<String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local_player(name: impl Into<String>) -> Self {
        Self {
            local_player: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn set_local_player(&mut self, name: impl Into<String>) {
        self.local_player = Some(name.into());
    }

    pub fn set_widget(&mut self, widget: WidgetRef, state: WidgetState) {
        self.widgets.insert(widget, state);
    }

    pub fn remove_widget(&mut self, widget: WidgetRef) {
        self.widgets.remove(&widget);
    }

    pub fn set_hidden(&mut self, widget: WidgetRef, hidden: bool) {
        self.widgets.entry(widget).or_default().hidden = hidden;
    }

    /// Show a player dialog line
    pub fn show_player_dialog(&mut self, text: &str, animation: i32) {
        self.set_widget(WidgetRef::PlayerText, WidgetState::text(text));
        self.set_widget(WidgetRef::PlayerHeadModel, WidgetState::animation(animation));
    }

    /// Show an NPC dialog line
    pub fn show_npc_dialog(&mut self, name: &str, text: &str, animation: i32) {
        self.set_widget(WidgetRef::NpcName, WidgetState::text(name));
        self.set_widget(WidgetRef::NpcText, WidgetState::text(text));
        self.set_widget(WidgetRef::NpcHeadModel, WidgetState::animation(animation));
    }

    /// Show an options menu; `lines` includes the title line
    pub fn show_options(&mut self, lines: &[&str]) {
        self.set_widget(WidgetRef::OptionList, WidgetState::children(lines.iter().copied()));
    }
}

impl ClientHost for MemoryHost {
    fn widget_text(&self, widget: WidgetRef) -> Option<String> {
        self.widgets.get(&widget)?.text.clone()
    }

    fn widget_children(&self, widget: WidgetRef) -> Option<Vec<String>> {
        self.widgets.get(&widget)?.children.clone()
    }

    fn widget_animation_id(&self, widget: WidgetRef) -> Option<i32> {
        self.widgets.get(&widget)?.animation
    }

    fn is_widget_hidden(&self, widget: WidgetRef) -> bool {
        self.widgets.get(&widget).is_none_or(|w| w.hidden)
    }

    fn local_player_name(&self) -> Option<String> {
        self.local_player.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_widget_is_hidden() {
        let host = MemoryHost::new();
        assert!(host.is_widget_hidden(WidgetRef::ChatboxInput));
        assert_eq!(host.widget_text(WidgetRef::NpcText), None);
    }

    #[test]
    fn test_set_hidden_toggles_visibility() {
        let mut host = MemoryHost::new();
        host.set_hidden(WidgetRef::ChatboxInput, false);
        assert!(!host.is_widget_hidden(WidgetRef::ChatboxInput));
        host.set_hidden(WidgetRef::ChatboxInput, true);
        assert!(host.is_widget_hidden(WidgetRef::ChatboxInput));
    }

    #[test]
    fn test_widget_state_from_json() {
        let state: WidgetState =
            serde_json::from_str(r#"{"children":["Select an Option","Yes"]}"#).unwrap();
        assert_eq!(state.children.unwrap().len(), 2);
        assert!(!state.hidden);
    }
}
