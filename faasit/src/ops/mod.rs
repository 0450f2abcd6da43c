//! Core operations.
//!
//! This module contains the business logic for faasit commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod info;
pub mod resolve;

pub use check::check;
pub use info::info;
pub use resolve::expand;

use faasit_ir::Spec;
use faasit_spec::BlockKind;

/// Name of the entry package's first application block.
fn application_block_name(spec: &Spec) -> Option<&str> {
    spec.entry_package()?
        .blocks_of_kind(BlockKind::Application.as_str())
        .next()
        .map(|b| b.name.as_str())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use faasit_ir::Spec;
    use faasit_spec::{IrFormat, parse_str};

    pub const FUNCTIONS_APP: &str = r#"{
  "packages": [
    {
      "blocks": [
        {
          "kind": "application",
          "name": "hello-app",
          "fields": {
            "defaultProvider": { "$ref": "aliyun" },
            "providers": [{ "$ref": "aliyun" }, { "$ref": "knative" }],
            "functions": [{ "$ref": "hello" }, { "$ref": "ghost" }],
            "inputExamples": [{ "value": { "name": "faasit" } }]
          }
        },
        { "kind": "provider", "name": "aliyun", "fields": { "kind": "aliyun" } },
        { "kind": "provider", "name": "knative", "fields": { "kind": "knative" } },
        {
          "kind": "function",
          "name": "hello",
          "fields": {
            "runtime": "nodejs",
            "codeDir": "./hello",
            "triggers": [{ "name": "http", "kind": "http" }]
          }
        }
      ]
    }
  ]
}"#;

    pub fn spec(json: &str) -> Spec {
        parse_str(json, "faasit.ir.json", IrFormat::Json).unwrap()
    }
}
