//! Plugin contracts for faasit.
//!
//! Plugins consume a resolved [`faasit_spec::Application`]. Generators turn
//! it into files; providers deploy, invoke and build it on a platform. Every
//! operation is optional, and an operation a plugin does not implement fails
//! with [`PluginError::Unsupported`].

mod env;
mod error;
mod generator;
mod logger;
mod provider;
mod runtime;
mod set;

pub use env::EnvironmentVars;
pub use error::{Operation, PluginError, is_unsupported};
pub use generator::{
    GenerateInput, GenerationItem, GenerationResult, GeneratorContext, GeneratorPlugin,
};
pub use logger::PluginLogger;
pub use provider::{BuildInput, DeployInput, InvokeInput, ProviderContext, ProviderPlugin};
pub use runtime::{Command, CommandOutput, LocalRuntime, PluginRuntime};
pub use set::PluginSet;
