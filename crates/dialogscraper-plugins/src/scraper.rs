//! Scraper context: one session directory plus the enabled plugins

use chrono::{DateTime, FixedOffset};
use dialogscraper_core::{Actor, ClientHost, ScraperConfig};
use dialogscraper_store::{BackgroundFlusher, ConversationSink, SessionStore, StoreError};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::dialog::DialogPlugin;
use crate::quest_diary::QuestDiaryPlugin;
use crate::registry::PluginRegistry;

/// Entry point for the host client's callbacks.
///
/// All state for one run lives here, so several scrapers can coexist.
pub struct DialogScraper {
    config: ScraperConfig,
    store: Arc<SessionStore>,
    registry: PluginRegistry,
    stopped: bool,
}

impl DialogScraper {
    /// Create the session directory and register the enabled plugins.
    ///
    /// Fails if the session directory cannot be created; nothing could be
    /// recorded without it.
    pub fn start(
        config: ScraperConfig,
        started_at: DateTime<FixedOffset>,
    ) -> Result<Self, StoreError> {
        let store = Arc::new(SessionStore::create(&config.save_path, &started_at)?);

        let sink: Arc<dyn ConversationSink> = if config.background_flush {
            Arc::new(BackgroundFlusher::spawn(SessionStore::clone(&store))?)
        } else {
            store.clone()
        };

        let mut registry = PluginRegistry::new();
        registry.register(Box::new(DialogPlugin::new(sink)), &config);
        registry.register(Box::new(QuestDiaryPlugin::new(store.clone())), &config);

        for message in registry.on_start() {
            info!("{}", message);
        }
        info!(
            plugins = ?registry.names(),
            session_dir = %store.session_dir().display(),
            "Dialog Scraper started"
        );

        Ok(Self {
            config,
            store,
            registry,
            stopped: false,
        })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    pub fn session_dir(&self) -> &Path {
        self.store.session_dir()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    pub fn on_tick(&mut self, host: &dyn ClientHost) {
        self.registry.on_tick(host);
    }

    pub fn on_interaction_changed(&mut self, source: &Actor, target: Option<&Actor>) {
        self.registry.on_interaction_changed(source, target);
    }

    pub fn on_widget_loaded(&mut self, group_id: i32) {
        self.registry.on_widget_loaded(group_id);
    }

    pub fn on_menu_option_clicked(
        &mut self,
        host: &dyn ClientHost,
        label: &str,
        action: i32,
        param: i32,
    ) {
        self.registry.on_menu_option_clicked(host, label, action, param);
    }

    pub fn on_key_pressed(&mut self, host: &dyn ClientHost, key_code: i32) {
        self.registry.on_key_pressed(host, key_code);
    }

    /// Stop all plugins, waiting for pending transcript writes
    pub fn shutdown(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        self.registry.on_shutdown();
        info!("Dialog Scraper stopped");
    }
}

impl Drop for DialogScraper {
    fn drop(&mut self) {
        self.shutdown();
    }
}
