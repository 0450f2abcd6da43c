use faasit_ir::{Fields, Value};
use serde::{Deserialize, Serialize};

use super::{Function, Provider, Workflow};
use crate::{BlockKind, Entity, Reference};

/// The root of a deployable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Provider used when nothing else is selected
    pub default_provider: Reference<Provider>,

    /// Every provider the application can target
    #[serde(default)]
    pub providers: Vec<Reference<Provider>>,

    #[serde(default)]
    pub functions: Vec<Reference<Function>>,

    /// Present for workflow applications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<Reference<Workflow>>,

    /// Sample inputs for `invoke`
    #[serde(default)]
    pub input_examples: Vec<InputExample>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Fields>,
}

impl Application {
    /// Whether this application is orchestrated by a workflow.
    pub fn is_workflow(&self) -> bool {
        self.workflow.is_some()
    }

    /// The providers the application may target, default first.
    ///
    /// The default provider is included even when `providers` does not list
    /// it, and each name appears once.
    pub fn candidate_providers(&self) -> Vec<&Reference<Provider>> {
        let mut out = vec![&self.default_provider];
        for provider in &self.providers {
            if !out.contains(&provider) {
                out.push(provider);
            }
        }
        out
    }

    /// A free-form option by key.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.as_ref().and_then(|o| o.get(key))
    }
}

impl Entity for Application {
    const KIND: BlockKind = BlockKind::Application;
}

/// A sample invocation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputExample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}
