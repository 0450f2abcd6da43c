//! The built-in schema for every block kind.

use std::sync::LazyLock;

use faasit_ir::Value;

use super::{Field, ObjectSchema, Shape};
use crate::BlockKind;

/// Schemas for all block kinds, one per [`BlockKind`] variant.
#[derive(Debug)]
pub struct SchemaRegistry {
    application: ObjectSchema,
    function: ObjectSchema,
    workflow: ObjectSchema,
    provider: ObjectSchema,
    event: ObjectSchema,
    secret: ObjectSchema,
    trigger: ObjectSchema,
}

/// The process-wide registry, built on first use.
pub fn registry() -> &'static SchemaRegistry {
    static REGISTRY: LazyLock<SchemaRegistry> = LazyLock::new(SchemaRegistry::new);
    &REGISTRY
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self {
            application: application_schema(),
            function: function_schema(),
            workflow: workflow_schema(),
            provider: provider_schema(),
            event: event_schema(),
            secret: secret_schema(),
            trigger: trigger_schema(),
        }
    }

    /// The schema for a block kind.
    pub fn get(&self, kind: BlockKind) -> &ObjectSchema {
        match kind {
            BlockKind::Application => &self.application,
            BlockKind::Function => &self.function,
            BlockKind::Workflow => &self.workflow,
            BlockKind::Provider => &self.provider,
            BlockKind::Event => &self.event,
            BlockKind::Secret => &self.secret,
            BlockKind::Trigger => &self.trigger,
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_list() -> Value {
    Value::List(Vec::new())
}

fn empty_string() -> Value {
    Value::String(String::new())
}

fn replicas_shape() -> Shape {
    Shape::integer_up_to(u32::MAX.into())
}

// cpu is a fractional core count, memory a whole number of megabytes.
// Neither may be negative.
fn resource_shape() -> Shape {
    Shape::Object(ObjectSchema::closed(vec![
        Field::optional("cpu", Shape::Number),
        Field::optional("memory", Shape::integer()),
    ]))
}

fn application_schema() -> ObjectSchema {
    ObjectSchema::closed(vec![
        Field::optional("name", Shape::String),
        Field::required("defaultProvider", Shape::Reference(BlockKind::Provider)),
        Field::with_default(
            "providers",
            Shape::list(Shape::Reference(BlockKind::Provider)),
            empty_list,
        ),
        Field::with_default(
            "functions",
            Shape::list(Shape::Reference(BlockKind::Function)),
            empty_list,
        ),
        Field::optional("workflow", Shape::Reference(BlockKind::Workflow)),
        Field::with_default(
            "inputExamples",
            Shape::list(Shape::Object(ObjectSchema::closed(vec![Field::optional(
                "value",
                Shape::Any,
            )]))),
            empty_list,
        ),
        Field::optional("options", Shape::map(Shape::Any)),
    ])
}

fn function_schema() -> ObjectSchema {
    ObjectSchema::closed(vec![
        Field::required("runtime", Shape::String),
        Field::optional("image", Shape::String),
        Field::optional("baseImage", Shape::String),
        Field::with_default("codeDir", Shape::String, empty_string),
        Field::optional("handler", Shape::String),
        Field::optional("replicas", replicas_shape()),
        Field::optional("resource", resource_shape()),
        Field::with_default(
            "triggers",
            Shape::list(Shape::Object(trigger_schema())),
            empty_list,
        ),
        Field::optional(
            "pubsub",
            Shape::Object(ObjectSchema::closed(vec![Field::required(
                "events",
                Shape::list(Shape::Reference(BlockKind::Event)),
            )])),
        ),
        Field::optional("role", Shape::String),
    ])
}

fn workflow_schema() -> ObjectSchema {
    ObjectSchema::closed(vec![
        Field::required(
            "functions",
            Shape::list(Shape::Reference(BlockKind::Function)),
        ),
        Field::required("runtime", Shape::String),
        Field::optional("image", Shape::String),
        Field::optional("baseImage", Shape::String),
        Field::required("codeDir", Shape::String),
        Field::optional("handler", Shape::String),
        Field::optional("replicas", replicas_shape()),
        Field::optional("resource", resource_shape()),
        Field::optional("role", Shape::String),
    ])
}

// Provider kinds carry their own settings; only the common ones are declared.
fn provider_schema() -> ObjectSchema {
    ObjectSchema::open(vec![
        Field::required("kind", Shape::String),
        Field::optional("bucket", Shape::String),
        Field::optional("region", Shape::String),
        Field::optional(
            "deployment",
            Shape::Object(ObjectSchema::closed(vec![
                Field::optional("runtimeClass", Shape::String),
                Field::optional("startMode", Shape::String),
            ])),
        ),
        Field::optional("invoke", Shape::map(Shape::String)),
        Field::optional("registry", Shape::String),
        Field::optional(
            "redis",
            Shape::Object(ObjectSchema::closed(vec![
                Field::optional("host", Shape::String),
                Field::optional("port", Shape::integer_up_to(u16::MAX.into())),
            ])),
        ),
    ])
}

fn event_schema() -> ObjectSchema {
    ObjectSchema::closed(vec![
        Field::required("type", Shape::String),
        Field::required("data", Shape::StructType),
    ])
}

fn secret_schema() -> ObjectSchema {
    ObjectSchema::closed(vec![
        Field::required("name", Shape::String),
        Field::required("value", Shape::String),
    ])
}

fn trigger_schema() -> ObjectSchema {
    ObjectSchema::closed(vec![
        Field::required("name", Shape::String),
        Field::required("kind", Shape::String),
    ])
}
