//! Intermediate representation types for faasit application specs.
//!
//! The IR is the already-parsed, generic form of a spec document: an ordered
//! list of packages, each holding an ordered list of kind-tagged blocks with an
//! untyped field bag. Nothing in this crate knows what an `application` or a
//! `function` is; typed validation lives in `faasit-spec`.
//!
//! # Architecture
//!
//! ```text
//! source (DSL) → parser (external) → faasit-ir (generic blocks) → faasit-spec (typed model) → plugins
//! ```
//!
//! The IR types are designed to be:
//! - Schema-agnostic (fields are plain [`Value`]s)
//! - Order-preserving (declaration order is significant for lookup)
//! - Serializable (JSON and TOML documents round-trip through serde)

mod spec;
mod value;

pub use spec::{Block, Package, Spec};
pub use value::{BlockRef, Fields, Value};
