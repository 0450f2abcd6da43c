use faasit_ir::BlockRef;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{BlockKind, Entity};

/// A pub/sub event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,

    /// Shape of the event payload
    pub data: StructType,
}

impl Entity for Event {
    const KIND: BlockKind = BlockKind::Event;
}

/// A struct-like type description: field names mapped to type expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructType {
    pub fields: IndexMap<String, TypeExpr>,
}

/// The type of a single field in a [`StructType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeExpr {
    /// A named type such as `string` or `int`
    Named(String),
    /// A list of the single inner type, written `[inner]`
    List(Vec<TypeExpr>),
    /// A reference to a declared type
    Ref(BlockRef),
    Struct(StructType),
}

impl TypeExpr {
    /// The element type of a list expression.
    pub fn element(&self) -> Option<&TypeExpr> {
        match self {
            TypeExpr::List(items) => items.first(),
            _ => None,
        }
    }
}
