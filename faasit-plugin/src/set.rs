//! Explicit registry of the plugins a host knows about.

use std::sync::Arc;

use faasit_spec::Provider;
use indexmap::IndexMap;
use tracing::debug;

use crate::{GeneratorPlugin, PluginError, ProviderPlugin};

/// Named generator and provider plugins.
///
/// Provider plugins are keyed by the provider `kind` they handle.
#[derive(Default, Clone)]
pub struct PluginSet {
    generators: IndexMap<String, Arc<dyn GeneratorPlugin>>,
    providers: IndexMap<String, Arc<dyn ProviderPlugin>>,
}

impl PluginSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under its own name, replacing any previous one.
    pub fn with_generator(mut self, plugin: impl GeneratorPlugin + 'static) -> Self {
        let name = plugin.name().to_string();
        self.generators.insert(name, Arc::new(plugin));
        self
    }

    /// Register a provider plugin under its own name, replacing any previous one.
    pub fn with_provider(mut self, plugin: impl ProviderPlugin + 'static) -> Self {
        let name = plugin.name().to_string();
        self.providers.insert(name, Arc::new(plugin));
        self
    }

    pub fn generator(&self, name: &str) -> Option<&dyn GeneratorPlugin> {
        self.generators.get(name).map(|p| p.as_ref())
    }

    pub fn provider(&self, name: &str) -> Option<&dyn ProviderPlugin> {
        self.providers.get(name).map(|p| p.as_ref())
    }

    /// The plugin that handles a provider block's `kind`.
    pub fn provider_for(&self, provider: &Provider) -> Result<&dyn ProviderPlugin, PluginError> {
        debug!(kind = %provider.kind, "selecting provider plugin");
        self.provider(&provider.kind)
            .ok_or_else(|| PluginError::not_found("provider", &provider.kind))
    }

    pub fn generator_names(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }

    pub fn provider_names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for PluginSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginSet")
            .field("generators", &self.generators.keys().collect::<Vec<_>>())
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}
