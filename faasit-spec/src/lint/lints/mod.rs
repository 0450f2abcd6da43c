//! Built-in lints.

mod dangling_reference;
mod default_provider;
mod duplicate_block;
mod empty_workflow;

pub use dangling_reference::DanglingReferenceLint;
pub use default_provider::DefaultProviderLint;
pub use duplicate_block::DuplicateBlockLint;
pub use empty_workflow::EmptyWorkflowLint;
