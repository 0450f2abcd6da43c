//! Provider plugins deploy, invoke and build applications on a platform.

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use eyre::Result;
use faasit_ir::Value;
use faasit_spec::{Application, Provider};

use crate::{EnvironmentVars, Operation, PluginError, PluginLogger, PluginRuntime};

#[derive(Debug, Clone, Copy)]
pub struct DeployInput<'a> {
    pub app: &'a Application,
    /// The provider to deploy to, which need not be the default one
    pub provider: &'a Provider,
}

#[derive(Debug, Clone, Copy)]
pub struct InvokeInput<'a> {
    pub app: &'a Application,
    pub func_name: &'a str,
    pub input: &'a Value,
    pub provider: &'a Provider,
}

#[derive(Debug, Clone, Copy)]
pub struct BuildInput<'a> {
    pub app: &'a Application,
    pub provider: &'a Provider,
    /// Image registry override
    pub registry: Option<&'a str>,
}

impl BuildInput<'_> {
    /// The registry to push to: the override, else the provider's own.
    pub fn registry(&self) -> Option<&str> {
        self.registry.or(self.provider.registry.as_deref())
    }
}

/// Context shared by provider operations.
#[derive(Clone)]
pub struct ProviderContext {
    /// Project directory
    pub cwd: PathBuf,
    pub rt: Arc<dyn PluginRuntime>,
    pub logger: PluginLogger,
    pub env: EnvironmentVars,
}

impl std::fmt::Debug for ProviderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderContext")
            .field("cwd", &self.cwd)
            .field("logger", &self.logger)
            .field("env", &self.env.len())
            .finish_non_exhaustive()
    }
}

/// A deployment platform.
///
/// Every operation is optional; the default implementations fail with
/// [`PluginError::Unsupported`].
#[async_trait]
pub trait ProviderPlugin: Send + Sync {
    fn name(&self) -> &str;

    async fn deploy(&self, input: DeployInput<'_>, ctx: &ProviderContext) -> Result<()> {
        let _ = (input, ctx);
        Err(PluginError::unsupported(self.name(), Operation::Deploy).into())
    }

    async fn invoke(&self, input: InvokeInput<'_>, ctx: &ProviderContext) -> Result<()> {
        let _ = (input, ctx);
        Err(PluginError::unsupported(self.name(), Operation::Invoke).into())
    }

    async fn build(&self, input: BuildInput<'_>, ctx: &ProviderContext) -> Result<()> {
        let _ = (input, ctx);
        Err(PluginError::unsupported(self.name(), Operation::Build).into())
    }
}
