//! Schema-driven validation of raw block fields.

use faasit_ir::{Fields, Value};

use crate::{
    Error, Result,
    schema::{Extra, ObjectSchema, Presence, Shape},
};

/// A segment of a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Validation context that carries the current field path.
///
/// Descending into nested objects and lists pushes a segment, so errors can
/// name the offending field.
///
/// # Example
///
/// ```ignore
/// let ctx = ValidateContext::for_block(BlockKind::Function, "hello");
/// let nested = ctx.push("triggers").index(0).push("kind");
/// assert_eq!(nested.path_string(), "function.hello.triggers[0].kind");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidateContext {
    path: Vec<Segment>,
}

impl ValidateContext {
    /// Create a context with an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context rooted at a block, e.g. `function.hello`.
    pub fn for_block(kind: impl std::fmt::Display, name: &str) -> Self {
        Self::new().push(kind.to_string()).push(name)
    }

    /// Push an object key and return a new context.
    pub fn push(&self, key: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(Segment::Key(key.into()));
        Self { path }
    }

    /// Push a list index and return a new context.
    pub fn index(&self, index: usize) -> Self {
        let mut path = self.path.clone();
        path.push(Segment::Index(index));
        Self { path }
    }

    /// Get the current path, e.g. `application.app.functions[1]`.
    ///
    /// Returns `<root>` if no path segments.
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            return "<root>".to_string();
        }
        let mut out = String::new();
        for segment in &self.path {
            match segment {
                Segment::Key(key) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(key);
                }
                Segment::Index(i) => out.push_str(&format!("[{}]", i)),
            }
        }
        out
    }

    fn violation(&self, expected: impl ToString, actual: &str) -> Box<Error> {
        Error::violation(self.path_string(), expected.to_string(), actual)
    }
}

/// Validate a raw field bag against an object schema.
///
/// Declared fields are checked in schema order and come first in the result;
/// under an open schema the undeclared fields follow in their original order.
/// Explicit `null` counts as absent.
pub fn validate(schema: &ObjectSchema, raw: &Fields, ctx: &ValidateContext) -> Result<Fields> {
    let mut out = Fields::with_capacity(raw.len().max(schema.fields.len()));

    for field in &schema.fields {
        let field_ctx = ctx.push(field.name);
        match raw.get(field.name).filter(|v| !v.is_null()) {
            Some(value) => {
                let validated = validate_value(&field.shape, value, &field_ctx)?;
                out.insert(field.name.to_string(), validated);
            }
            None => match field.presence {
                Presence::Required => return Err(field_ctx.violation(&field.shape, "missing")),
                Presence::Optional => {}
                Presence::Default(supplier) => {
                    out.insert(field.name.to_string(), supplier());
                }
            },
        }
    }

    for (key, value) in raw {
        if schema.field(key).is_some() {
            continue;
        }
        match schema.extra {
            Extra::Reject => return Err(Error::unknown_field(ctx.push(key).path_string(), key)),
            Extra::Preserve => {
                out.insert(key.clone(), value.clone());
            }
        }
    }

    Ok(out)
}

/// Validate a single value against a shape.
pub fn validate_value(shape: &Shape, value: &Value, ctx: &ValidateContext) -> Result<Value> {
    match (shape, value) {
        (Shape::Any, v) => Ok(v.clone()),
        (Shape::String, Value::String(_))
        | (Shape::Bool, Value::Bool(_)) => Ok(value.clone()),
        (Shape::Number, Value::Int(i)) if *i >= 0 => Ok(value.clone()),
        (Shape::Number, Value::Float(f)) if *f >= 0.0 => Ok(value.clone()),
        (Shape::Integer { max }, Value::Int(i)) if u64::try_from(*i).is_ok_and(|i| i <= *max) => {
            Ok(value.clone())
        }
        (Shape::Object(schema), Value::Object(fields)) => {
            validate(schema, fields, ctx).map(Value::Object)
        }
        (Shape::List(inner), Value::List(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| validate_value(inner, item, &ctx.index(i)))
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        (Shape::Map(inner), Value::Object(fields)) => fields
            .iter()
            .map(|(k, v)| -> Result<(String, Value)> {
                Ok((k.clone(), validate_value(inner, v, &ctx.push(k))?))
            })
            .collect::<Result<Fields>>()
            .map(Value::Object),
        (Shape::Reference(target), Value::Reference(r)) => match &r.kind {
            Some(hint) if hint != target.as_str() => {
                Err(ctx.violation(shape, &format!("reference to {}", hint)))
            }
            _ => Ok(value.clone()),
        },
        (Shape::StructType, Value::Object(fields)) => {
            for (name, ty) in fields {
                validate_type_expr(ty, &ctx.push(name))?;
            }
            Ok(value.clone())
        }
        (Shape::Integer { .. } | Shape::Number, Value::Int(i)) => {
            Err(ctx.violation(shape, &format!("integer {}", i)))
        }
        (Shape::Number, Value::Float(f)) => Err(ctx.violation(shape, &format!("number {}", f))),
        (_, v) => Err(ctx.violation(shape, v.type_name())),
    }
}

/// A type expression is a type name, a reference, a one-element list or a
/// nested struct.
fn validate_type_expr(value: &Value, ctx: &ValidateContext) -> Result<()> {
    match value {
        Value::String(_) | Value::Reference(_) => Ok(()),
        Value::List(items) if items.len() == 1 => validate_type_expr(&items[0], &ctx.index(0)),
        Value::List(items) => Err(ctx.violation(
            "type expression",
            &format!("list of {} elements", items.len()),
        )),
        Value::Object(fields) => {
            for (name, ty) in fields {
                validate_type_expr(ty, &ctx.push(name))?;
            }
            Ok(())
        }
        other => Err(ctx.violation("type expression", other.type_name())),
    }
}
