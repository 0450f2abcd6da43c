//! Declarative shape descriptions for block kinds.
//!
//! A schema is data, not code: each block kind maps to an [`ObjectSchema`]
//! listing its fields, their [`Shape`] and their [`Presence`] policy. The
//! validator walks these descriptions; the typed model in [`crate::model`]
//! mirrors them field for field.

mod registry;

use std::fmt;

use faasit_ir::Value;
pub use registry::{SchemaRegistry, registry};

use crate::BlockKind;

/// The shape a field value must have.
#[derive(Debug, Clone)]
pub enum Shape {
    /// A string.
    String,
    /// A non-negative number, integer or floating point.
    Number,
    /// A non-negative integer no greater than `max`.
    Integer { max: u64 },
    /// A boolean.
    Bool,
    /// Anything, preserved verbatim.
    Any,
    /// A nested object.
    Object(ObjectSchema),
    /// A list whose elements all have the inner shape.
    List(Box<Shape>),
    /// A string-keyed map whose values all have the inner shape.
    Map(Box<Shape>),
    /// A reference to a block of the given kind (shape only).
    Reference(BlockKind),
    /// A struct-like type description: field names mapped to type expressions.
    StructType,
}

impl Shape {
    /// A non-negative integer bounded only by the IR's integer range.
    pub fn integer() -> Self {
        Shape::Integer {
            max: i64::MAX.unsigned_abs(),
        }
    }

    /// A non-negative integer no greater than `max`.
    pub fn integer_up_to(max: u64) -> Self {
        Shape::Integer { max }
    }

    /// Shorthand for a list shape.
    pub fn list(inner: Shape) -> Self {
        Shape::List(Box::new(inner))
    }

    /// Shorthand for a map shape.
    pub fn map(inner: Shape) -> Self {
        Shape::Map(Box::new(inner))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::String => f.write_str("string"),
            Shape::Number => f.write_str("non-negative number"),
            Shape::Integer { max } if *max >= i64::MAX.unsigned_abs() => {
                f.write_str("non-negative integer")
            }
            Shape::Integer { max } => write!(f, "integer between 0 and {}", max),
            Shape::Bool => f.write_str("boolean"),
            Shape::Any => f.write_str("any value"),
            Shape::Object(_) => f.write_str("object"),
            Shape::List(inner) => write!(f, "list of {}", inner),
            Shape::Map(inner) => write!(f, "map of {}", inner),
            Shape::Reference(kind) => write!(f, "reference to {}", kind),
            Shape::StructType => f.write_str("struct type description"),
        }
    }
}

/// What happens when a field is absent.
#[derive(Debug, Clone, Copy)]
pub enum Presence {
    /// Absence is a violation.
    Required,
    /// Absence is fine; the field stays absent.
    Optional,
    /// Absence is filled in by calling the supplier.
    ///
    /// The supplier runs on every validation, so each result owns a fresh
    /// value.
    Default(fn() -> Value),
}

/// A declared field of an object schema.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
    pub presence: Presence,
}

impl Field {
    pub fn required(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            presence: Presence::Required,
        }
    }

    pub fn optional(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            presence: Presence::Optional,
        }
    }

    pub fn with_default(name: &'static str, shape: Shape, default: fn() -> Value) -> Self {
        Self {
            name,
            shape,
            presence: Presence::Default(default),
        }
    }
}

/// How an object schema treats fields it does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extra {
    /// Undeclared fields are rejected.
    Reject,
    /// Undeclared fields are kept verbatim.
    Preserve,
}

/// The shape of an object: its declared fields and its extra-field policy.
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    pub fields: Vec<Field>,
    pub extra: Extra,
}

impl ObjectSchema {
    /// A closed schema: only declared fields are allowed.
    pub fn closed(fields: Vec<Field>) -> Self {
        Self {
            fields,
            extra: Extra::Reject,
        }
    }

    /// An open schema: declared fields are validated, others are preserved.
    pub fn open(fields: Vec<Field>) -> Self {
        Self {
            fields,
            extra: Extra::Preserve,
        }
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_open(&self) -> bool {
        self.extra == Extra::Preserve
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_display() {
        assert_eq!(Shape::list(Shape::String).to_string(), "list of string");
        assert_eq!(
            Shape::list(Shape::Reference(BlockKind::Function)).to_string(),
            "list of reference to function"
        );
        assert_eq!(Shape::map(Shape::Any).to_string(), "map of any value");
        assert_eq!(Shape::integer().to_string(), "non-negative integer");
        assert_eq!(
            Shape::integer_up_to(u16::MAX.into()).to_string(),
            "integer between 0 and 65535"
        );
        assert_eq!(Shape::Number.to_string(), "non-negative number");
    }

    #[test]
    fn test_field_lookup() {
        let schema = ObjectSchema::closed(vec![
            Field::required("name", Shape::String),
            Field::optional("role", Shape::String),
        ]);
        assert!(schema.field("name").is_some());
        assert!(schema.field("missing").is_none());
        assert!(!schema.is_open());
        assert!(ObjectSchema::open(vec![]).is_open());
    }
}
