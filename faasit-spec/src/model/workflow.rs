use serde::{Deserialize, Serialize};

use super::{Function, Resource};
use crate::{BlockKind, Entity, Reference};

/// An orchestration of functions deployed as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// The functions this workflow orchestrates
    pub functions: Vec<Reference<Function>>,

    pub runtime: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_image: Option<String>,

    /// Source directory of the orchestrator; unlike functions there is no default
    pub code_dir: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Entity for Workflow {
    const KIND: BlockKind = BlockKind::Workflow;
}
