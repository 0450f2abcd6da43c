//! Generator plugins turn a resolved application into files.

use async_trait::async_trait;
use eyre::Result;
use faasit_ir::Spec;
use faasit_spec::Application;
use serde::Serialize;

use crate::{Operation, PluginError, PluginLogger};

/// A single generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationItem {
    /// Output path, relative to the output directory
    pub path: String,
    pub content: String,
    /// MIME type of `content`, e.g. `application/yaml`
    pub content_type: String,
}

impl GenerationItem {
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            content_type: content_type.into(),
        }
    }
}

/// Ordered output of a generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub items: Vec<GenerationItem>,
}

impl GenerationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: GenerationItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Input to [`GeneratorPlugin::generate`].
#[derive(Debug, Clone, Copy)]
pub struct GenerateInput<'a> {
    pub app: &'a Application,
    /// The whole document, for resolving the application's references
    pub ir: &'a Spec,
}

/// Context shared by generator invocations.
#[derive(Debug, Clone)]
pub struct GeneratorContext {
    pub logger: PluginLogger,
}

#[async_trait]
pub trait GeneratorPlugin: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(
        &self,
        input: GenerateInput<'_>,
        ctx: &GeneratorContext,
    ) -> Result<GenerationResult> {
        let _ = (input, ctx);
        Err(PluginError::unsupported(self.name(), Operation::Generate).into())
    }
}
