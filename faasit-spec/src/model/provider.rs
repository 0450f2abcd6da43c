use faasit_ir::{Fields, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{BlockKind, Entity};

/// A deployment target.
///
/// Providers are open: settings specific to a provider kind are kept in
/// [`Provider::extra`] exactly as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Provider kind, e.g. `aliyun`, `knative` or `oss`
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Deployment>,

    /// Per-operation invocation overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoke: Option<IndexMap<String, String>>,

    /// Container registry used by `build`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis: Option<RedisLocation>,

    /// Undeclared fields, in their original order
    #[serde(flatten)]
    pub extra: Fields,
}

impl Provider {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            bucket: None,
            region: None,
            deployment: None,
            invoke: None,
            registry: None,
            redis: None,
            extra: Fields::new(),
        }
    }

    /// An undeclared, kind-specific setting.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// The invocation override for an operation, if any.
    pub fn invoke_override(&self, operation: &str) -> Option<&str> {
        self.invoke
            .as_ref()
            .and_then(|m| m.get(operation))
            .map(String::as_str)
    }
}

impl Entity for Provider {
    const KIND: BlockKind = BlockKind::Provider;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_class: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_mode: Option<String>,
}

/// Where a provider's state store lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedisLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use faasit_ir::Block;

    use super::*;
    use crate::parse_block;

    #[test]
    fn test_provider_known_and_extra_fields() {
        let block = Block::new("provider", "knative")
            .with_field("kind", "knative")
            .with_field(
                "deployment",
                Value::object([("runtimeClass", Value::from("kata"))]),
            )
            .with_field("invoke", Value::object([("hello", Value::from("curl"))]))
            .with_field("redis", Value::object([("port", Value::Int(6379))]))
            .with_field("namespace", "faasit");
        let provider: Provider = parse_block(&block).unwrap();

        assert_eq!(
            provider
                .deployment
                .as_ref()
                .and_then(|d| d.runtime_class.as_deref()),
            Some("kata")
        );
        assert_eq!(provider.invoke_override("hello"), Some("curl"));
        assert_eq!(provider.redis.as_ref().and_then(|r| r.port), Some(6379));
        assert_eq!(provider.extra("namespace"), Some(&Value::from("faasit")));
        assert_eq!(provider.extra.len(), 1);
    }

    #[test]
    fn test_list_extras_round_trip() {
        let fields: Fields = serde_json::from_str(
            r#"{"kind": "oss", "zones": ["cn-hangzhou", "us-west"], "tags": ["x"]}"#,
        )
        .unwrap();
        let block = Block {
            kind: "provider".into(),
            name: "oss".into(),
            fields: fields.clone(),
        };
        let provider: Provider = parse_block(&block).unwrap();

        assert_eq!(
            provider.extra("zones"),
            Some(&Value::List(vec!["cn-hangzhou".into(), "us-west".into()]))
        );
        assert_eq!(provider.extra("tags"), Some(&Value::List(vec!["x".into()])));
        assert_eq!(crate::to_fields(&provider).unwrap(), fields);
    }

    #[test]
    fn test_provider_new() {
        let provider = Provider::new("aliyun");
        assert_eq!(provider.kind, "aliyun");
        assert!(provider.extra.is_empty());
        assert!(provider.invoke_override("hello").is_none());
    }
}
