//! Plugin registry for dispatching client callbacks

use dialogscraper_core::{Actor, ClientHost, ScraperConfig};

use crate::base::ScraperPlugin;

/// Registry of enabled plugins, called in registration order
pub struct PluginRegistry {
    plugins: Vec<Box<dyn ScraperPlugin>>,
}

impl PluginRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Register a plugin if `config` enables it
    pub fn register(&mut self, plugin: Box<dyn ScraperPlugin>, config: &ScraperConfig) {
        if plugin.is_enabled(config) {
            self.plugins.push(plugin);
        }
    }

    /// Names of the registered plugins
    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Call on_start for all plugins
    pub fn on_start(&mut self) -> Vec<String> {
        self.plugins
            .iter_mut()
            .filter_map(|p| p.on_start())
            .collect()
    }

    /// Call on_shutdown for all plugins
    pub fn on_shutdown(&mut self) {
        for plugin in &mut self.plugins {
            plugin.on_shutdown();
        }
    }

    pub fn on_tick(&mut self, host: &dyn ClientHost) {
        for plugin in &mut self.plugins {
            plugin.on_tick(host);
        }
    }

    pub fn on_interaction_changed(&mut self, source: &Actor, target: Option<&Actor>) {
        for plugin in &mut self.plugins {
            plugin.on_interaction_changed(source, target);
        }
    }

    pub fn on_widget_loaded(&mut self, group_id: i32) {
        for plugin in &mut self.plugins {
            plugin.on_widget_loaded(group_id);
        }
    }

    pub fn on_menu_option_clicked(
        &mut self,
        host: &dyn ClientHost,
        label: &str,
        action: i32,
        param: i32,
    ) {
        for plugin in &mut self.plugins {
            plugin.on_menu_option_clicked(host, label, action, param);
        }
    }

    pub fn on_key_pressed(&mut self, host: &dyn ClientHost, key_code: i32) {
        for plugin in &mut self.plugins {
            plugin.on_key_pressed(host, key_code);
        }
    }

    /// Get number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
