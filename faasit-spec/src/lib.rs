//! Typed resolution and validation for faasit IR documents.
//!
//! Turns the generic blocks of [`faasit_ir`] into validated, typed entities:
//!
//! - [`schema`] describes every block kind as data ([`schema::registry`]).
//! - [`validate`] checks raw fields against those descriptions, filling in
//!   defaults and rejecting shape mismatches with a field path.
//! - [`resolve_application`] finds the single application block and returns
//!   a typed [`Application`] whose links are [`Reference`]s.
//! - [`Resolver`] dereferences those links on demand.
//! - [`lint`] runs whole-document checks on top.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod entity;
mod error;
mod kind;
mod load;
mod model;
mod reference;
mod resolve;

pub mod lint;
pub mod schema;
pub mod validate;

pub use entity::{Entity, parse_block, parse_fields, to_fields};
pub use error::{Error, Result, SourceContext};
pub use kind::BlockKind;
pub use load::{IrFile, IrFormat, parse_str};
pub use model::*;
pub use reference::{Reference, Resolver};
pub use resolve::{is_workflow_application, parse_application, resolve_application};
