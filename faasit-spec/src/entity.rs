//! Typed block entities and their conversion from raw fields.

use faasit_ir::{Block, Fields};
use serde::{Serialize, de::DeserializeOwned};
use tracing::trace;

use crate::{
    BlockKind, Error, Result,
    schema::{ObjectSchema, registry},
    validate::{ValidateContext, validate},
};

/// A block kind with a typed, validated representation.
///
/// The serde layout of an entity mirrors its schema field for field, so a
/// validated field bag always decodes and an entity always encodes back into
/// fields that validate to the same value.
pub trait Entity: Serialize + DeserializeOwned {
    /// The block kind this entity is produced from.
    const KIND: BlockKind;

    /// The schema this entity is validated against.
    fn schema() -> &'static ObjectSchema {
        registry().get(Self::KIND)
    }
}

/// Validate a raw field bag and decode it into an entity.
pub fn parse_fields<T: Entity>(raw: &Fields, ctx: &ValidateContext) -> Result<T> {
    let validated = validate(T::schema(), raw, ctx)?;
    trace!(kind = %T::KIND, path = %ctx.path_string(), "decoding validated fields");
    decode(&validated, ctx)
}

/// Validate a block and decode it into an entity.
///
/// The block's kind must be `T::KIND`.
pub fn parse_block<T: Entity>(block: &Block) -> Result<T> {
    if block.kind != T::KIND.as_str() {
        return Err(Error::kind_mismatch(&block.name, T::KIND, &block.kind));
    }
    parse_fields(&block.fields, &ValidateContext::for_block(T::KIND, &block.name))
}

/// Encode an entity back into a raw field bag.
pub fn to_fields<T: Entity>(entity: &T) -> Result<Fields> {
    let json = serde_json::to_value(entity)
        .map_err(|e| Error::violation(T::KIND.as_str(), T::KIND.as_str(), e.to_string()))?;
    serde_json::from_value(json)
        .map_err(|e| Error::violation(T::KIND.as_str(), "object", e.to_string()))
}

fn decode<T: Entity>(validated: &Fields, ctx: &ValidateContext) -> Result<T> {
    let json = serde_json::to_value(validated)
        .map_err(|e| Error::violation(ctx.path_string(), T::KIND.as_str(), e.to_string()))?;
    serde_json::from_value(json)
        .map_err(|e| Error::violation(ctx.path_string(), T::KIND.as_str(), e.to_string()))
}
