use std::fmt::Display;

use tracing::{debug, error, info, warn};

/// Logger handed to plugins.
///
/// Events go through `tracing` with the plugin name attached as a field, so
/// they share the host's subscriber and filtering.
#[derive(Debug, Clone)]
pub struct PluginLogger {
    plugin: String,
}

impl PluginLogger {
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
        }
    }

    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn debug(&self, message: impl Display) {
        debug!(plugin = %self.plugin, "{}", message);
    }

    pub fn info(&self, message: impl Display) {
        info!(plugin = %self.plugin, "{}", message);
    }

    pub fn warn(&self, message: impl Display) {
        warn!(plugin = %self.plugin, "{}", message);
    }

    pub fn error(&self, message: impl Display) {
        error!(plugin = %self.plugin, "{}", message);
    }
}
