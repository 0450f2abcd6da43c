//! Typed entities for every block kind.

mod application;
mod event;
mod function;
mod provider;
mod secret;
mod workflow;

pub use application::{Application, InputExample};
pub use event::{Event, StructType, TypeExpr};
pub use function::{Function, PubSub, Resource, Trigger};
pub use provider::{Deployment, Provider, RedisLocation};
pub use secret::Secret;
pub use workflow::Workflow;
