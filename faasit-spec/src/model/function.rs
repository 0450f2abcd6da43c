use serde::{Deserialize, Serialize};

use super::Event;
use crate::{BlockKind, Entity, Reference};

/// A deployable function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    /// Language runtime, e.g. `nodejs` or `python`
    pub runtime: String,

    /// Prebuilt container image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_image: Option<String>,

    /// Source directory, relative to the project root
    #[serde(default)]
    pub code_dir: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,

    #[serde(default)]
    pub triggers: Vec<Trigger>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubsub: Option<PubSub>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Function {
    /// The events this function subscribes to.
    pub fn events(&self) -> &[Reference<Event>] {
        self.pubsub.as_ref().map_or(&[], |p| p.events.as_slice())
    }

    /// Find a trigger by name.
    pub fn trigger(&self, name: &str) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.name == name)
    }
}

impl Entity for Function {
    const KIND: BlockKind = BlockKind::Function;
}

/// Compute resources requested by a function or workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,

    /// Memory in megabytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
}

/// How a function is triggered, e.g. `{name: "http", kind: "http"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub name: String,
    pub kind: String,
}

impl Entity for Trigger {
    const KIND: BlockKind = BlockKind::Trigger;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubSub {
    pub events: Vec<Reference<Event>>,
}

#[cfg(test)]
mod tests {
    use faasit_ir::{Block, BlockRef, Value};

    use super::*;
    use crate::parse_block;

    #[test]
    fn test_resource_preserved_triggers_default() {
        let block = Block::new("function", "hello")
            .with_field("runtime", "nodejs")
            .with_field(
                "resource",
                Value::object([("cpu", Value::Int(2)), ("memory", Value::Int(512))]),
            );
        let function: Function = parse_block(&block).unwrap();
        assert_eq!(
            function.resource,
            Some(Resource {
                cpu: Some(2.0),
                memory: Some(512),
            })
        );
        assert!(function.triggers.is_empty());
        assert!(function.events().is_empty());
    }

    #[test]
    fn test_triggers_and_events() {
        let block = Block::new("function", "worker")
            .with_field("runtime", "python")
            .with_field(
                "triggers",
                Value::List(vec![Value::object([
                    ("name", Value::from("http")),
                    ("kind", Value::from("http")),
                ])]),
            )
            .with_field(
                "pubsub",
                Value::object([(
                    "events",
                    Value::List(vec![BlockRef::new("created").into()]),
                )]),
            );
        let function: Function = parse_block(&block).unwrap();
        assert_eq!(function.trigger("http").map(|t| t.kind.as_str()), Some("http"));
        assert!(function.trigger("timer").is_none());
        assert_eq!(function.events()[0].name(), "created");
    }
}
