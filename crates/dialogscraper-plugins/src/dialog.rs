//! Dialog Plugin - Reconstructs conversations and hands them to the store

use dialogscraper_core::selection::{resolve_key_press, resolve_menu_click};
use dialogscraper_core::{
    build_dialog_entry, classify, Actor, ClientHost, ConversationBuilder, PendingEvents,
    ScraperConfig, WidgetRef,
};
use dialogscraper_store::{ConversationSink, NpcRef};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::base::{now, ScraperPlugin};

/// Last NPC the local player interacted with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNpc {
    pub id: i32,
    pub name: Option<String>,
}

pub struct DialogPlugin {
    name: String,
    pending: PendingEvents,
    builder: ConversationBuilder,
    active_npc: Option<ActiveNpc>,
    sink: Arc<dyn ConversationSink>,
    conversations_saved: usize,
    conversations_dropped: usize,
}

impl DialogPlugin {
    pub fn new(sink: Arc<dyn ConversationSink>) -> Self {
        Self {
            name: "dialog".to_string(),
            pending: PendingEvents::new(),
            builder: ConversationBuilder::new(),
            active_npc: None,
            sink,
            conversations_saved: 0,
            conversations_dropped: 0,
        }
    }

    pub fn builder(&self) -> &ConversationBuilder {
        &self.builder
    }

    pub fn active_npc(&self) -> Option<&ActiveNpc> {
        self.active_npc.as_ref()
    }

    pub fn conversations_saved(&self) -> usize {
        self.conversations_saved
    }

    pub fn conversations_dropped(&self) -> usize {
        self.conversations_dropped
    }

    fn drain_pending(&mut self, host: &dyn ClientHost) {
        if self.pending.has_dialog() {
            self.builder.begin();
        }

        for event in self.pending.drain() {
            let Some(kind) = event.dialog_kind() else {
                continue;
            };
            match build_dialog_entry(kind, host, self.builder.previous_text(), now()) {
                Ok(entry) => {
                    debug!(kind = kind.as_str(), text = ?entry.text(), "Dialog captured");
                    self.builder.push(entry);
                }
                Err(e) => warn!(kind = kind.as_str(), "Skipping dialog record: {}", e),
            }
        }
    }

    fn end_conversation(&mut self) {
        let Some(conversation) = self.builder.finish() else {
            return;
        };

        let npc = match &self.active_npc {
            Some(ActiveNpc {
                id,
                name: Some(name),
            }) => NpcRef::new(*id, name.clone()),
            _ => {
                warn!(
                    entries = conversation.len(),
                    "Conversation ended with no known NPC, discarding"
                );
                self.conversations_dropped += 1;
                return;
            }
        };

        info!(npc = %npc.name, entries = conversation.len(), "Conversation ended");
        match self.sink.submit(&npc, conversation) {
            Ok(()) => self.conversations_saved += 1,
            Err(e) => {
                error!(npc = %npc.name, "Failed to save conversation: {}", e);
                self.conversations_dropped += 1;
            }
        }
    }
}

impl ScraperPlugin for DialogPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Save each dialog line, along with head animations and options"
    }

    fn is_enabled(&self, config: &ScraperConfig) -> bool {
        config.scrape_dialog
    }

    fn on_start(&mut self) -> Option<String> {
        Some("Dialog: Active (conversation capture)".to_string())
    }

    fn on_shutdown(&mut self) {
        if self.builder.is_active() {
            debug!(
                entries = self.builder.entries().len(),
                "Shutting down mid-conversation, entries not saved"
            );
        }
        self.sink.close();
    }

    fn on_tick(&mut self, host: &dyn ClientHost) {
        self.drain_pending(host);

        // The chat input reappears once no "Continue" is left
        if self.builder.is_active() && !host.is_widget_hidden(WidgetRef::ChatboxInput) {
            self.end_conversation();
        }
    }

    fn on_interaction_changed(&mut self, source: &Actor, target: Option<&Actor>) {
        if *source != Actor::LocalPlayer {
            return;
        }
        if let Some(Actor::Npc { id, name }) = target {
            self.active_npc = Some(ActiveNpc {
                id: *id,
                name: name.clone(),
            });
        }
    }

    fn on_widget_loaded(&mut self, group_id: i32) {
        if let Some(event) = classify(group_id).filter(|e| e.dialog_kind().is_some()) {
            if self.pending.push(event) {
                debug!(group_id, ?event, "Dialog widget queued");
            }
        }
    }

    fn on_menu_option_clicked(
        &mut self,
        host: &dyn ClientHost,
        label: &str,
        action: i32,
        param: i32,
    ) {
        if let Some(text) = resolve_menu_click(host, label, action, param) {
            self.builder.record_selection(text);
        }
    }

    fn on_key_pressed(&mut self, host: &dyn ClientHost, key_code: i32) {
        if let Some(text) = resolve_key_press(host, key_code) {
            self.builder.record_selection(text);
        }
    }
}
