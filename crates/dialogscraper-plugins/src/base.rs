//! Base plugin trait

use chrono::{DateTime, FixedOffset, Local};
use dialogscraper_core::{Actor, ClientHost, ScraperConfig};

/// Current local time, used to stamp captured records
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// A unit of capture behavior reacting to client callbacks.
///
/// Event hooks only queue work or update registers; I/O happens in `on_tick`.
pub trait ScraperPlugin: Send {
    /// Plugin name (unique identifier)
    fn name(&self) -> &str;

    /// Plugin description
    fn description(&self) -> &str {
        ""
    }

    /// Check if the plugin should run under `config`
    fn is_enabled(&self, _config: &ScraperConfig) -> bool {
        true
    }

    // Lifecycle hooks (default implementations do nothing)

    /// Called once the session directory exists
    fn on_start(&mut self) -> Option<String> {
        None
    }

    /// Called when the scraper stops
    fn on_shutdown(&mut self) {}

    /// Called once per game tick
    fn on_tick(&mut self, _host: &dyn ClientHost) {}

    /// Called when an actor's interaction target changes
    fn on_interaction_changed(&mut self, _source: &Actor, _target: Option<&Actor>) {}

    /// Called when a widget group becomes visible
    fn on_widget_loaded(&mut self, _group_id: i32) {}

    /// Called on any menu action
    fn on_menu_option_clicked(
        &mut self,
        _host: &dyn ClientHost,
        _label: &str,
        _action: i32,
        _param: i32,
    ) {
    }

    /// Called on raw key input
    fn on_key_pressed(&mut self, _host: &dyn ClientHost, _key_code: i32) {}
}
