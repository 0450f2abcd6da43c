//! Untyped field values.

use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, MapAccess, Visitor},
};

/// Field bag of a block or nested object, in declaration order.
pub type Fields = IndexMap<String, Value>;

/// A raw field value as produced by the parser.
///
/// Serialized untagged, so a JSON document maps onto it directly. A reference
/// is an object with a `$ref` key (and an optional `$kind` hint); any other
/// object is a plain [`Value::Object`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Reference(BlockRef),
    List(Vec<Value>),
    Object(Fields),
}

impl Value {
    /// Human-readable name of the value's shape, used in validation errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Reference(_) => "reference",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&BlockRef> {
        match self {
            Value::Reference(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Fields> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Build an object value from key/value pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<BlockRef> for Value {
    fn from(r: BlockRef) -> Self {
        Value::Reference(r)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Fields> for Value {
    fn from(fields: Fields) -> Self {
        Value::Object(fields)
    }
}

/// A raw reference to another block, by name.
///
/// The optional `kind` is a hint written by the parser when the reference
/// site already knows the target kind. It is only checked against the
/// declared target kind; the target block itself is never looked up here.
///
/// Only an object with a string `$ref` key (and at most a `$kind` key)
/// deserializes into a `BlockRef`. Lists never do, so `["a", "b"]` stays a
/// [`Value::List`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BlockRef {
    #[serde(rename = "$ref")]
    pub name: String,
    #[serde(rename = "$kind", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl BlockRef {
    /// Reference a block by name without a kind hint.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
        }
    }

    /// Reference a block by name with a kind hint.
    pub fn with_kind(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind.into()),
        }
    }
}

const BLOCK_REF_FIELDS: &[&str] = &["$ref", "$kind"];

impl<'de> Deserialize<'de> for BlockRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(BlockRefVisitor)
    }
}

struct BlockRefVisitor;

impl<'de> Visitor<'de> for BlockRefVisitor {
    type Value = BlockRef;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with a `$ref` key")
    }

    fn visit_map<A>(self, mut map: A) -> Result<BlockRef, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut name: Option<String> = None;
        let mut kind: Option<Option<String>> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "$ref" => {
                    if name.is_some() {
                        return Err(de::Error::duplicate_field("$ref"));
                    }
                    name = Some(map.next_value()?);
                }
                "$kind" => {
                    if kind.is_some() {
                        return Err(de::Error::duplicate_field("$kind"));
                    }
                    kind = Some(map.next_value()?);
                }
                other => return Err(de::Error::unknown_field(other, BLOCK_REF_FIELDS)),
            }
        }

        let name = name.ok_or_else(|| de::Error::missing_field("$ref"))?;
        Ok(BlockRef {
            name,
            kind: kind.flatten(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).expect("valid value json")
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(parse("null"), Value::Null);
        assert_eq!(parse("true"), Value::Bool(true));
        assert_eq!(parse("42"), Value::Int(42));
        assert_eq!(parse("0.5"), Value::Float(0.5));
        assert_eq!(parse(r#""nodejs""#), Value::String("nodejs".into()));
    }

    #[test]
    fn test_reference_value() {
        assert_eq!(parse(r#"{"$ref": "hello"}"#), Value::Reference(BlockRef::new("hello")));
        assert_eq!(
            parse(r#"{"$ref": "aliyun", "$kind": "provider"}"#),
            Value::Reference(BlockRef::with_kind("aliyun", "provider"))
        );
    }

    #[test]
    fn test_object_with_ref_and_other_keys_is_object() {
        let value = parse(r#"{"$ref": "hello", "extra": 1}"#);
        let fields = value.as_object().expect("object");
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_short_string_lists_stay_lists() {
        assert_eq!(parse(r#"["x"]"#), Value::List(vec!["x".into()]));
        assert_eq!(
            parse(r#"["cn-hangzhou", "us-west"]"#),
            Value::List(vec!["cn-hangzhou".into(), "us-west".into()])
        );
        assert_eq!(
            parse(r#"[["string"]]"#),
            Value::List(vec![Value::List(vec!["string".into()])])
        );
    }

    #[test]
    fn test_list_of_references() {
        assert_eq!(
            parse(r#"[{"$ref": "a"}, "b"]"#),
            Value::List(vec![BlockRef::new("a").into(), "b".into()])
        );
    }

    #[test]
    fn test_block_ref_requires_object() {
        assert!(serde_json::from_str::<BlockRef>(r#"["hello"]"#).is_err());
        assert!(serde_json::from_str::<BlockRef>(r#"["hello", "function"]"#).is_err());
        assert!(serde_json::from_str::<BlockRef>(r#"{"$kind": "function"}"#).is_err());
        assert!(serde_json::from_str::<BlockRef>(r#"{"$ref": 1}"#).is_err());
        assert_eq!(
            serde_json::from_str::<BlockRef>(r#"{"$ref": "hello", "$kind": null}"#).unwrap(),
            BlockRef::new("hello")
        );
    }

    #[test]
    fn test_non_string_ref_is_object() {
        let value = parse(r#"{"$ref": 1}"#);
        assert_eq!(value.type_name(), "object");
    }

    #[test]
    fn test_object_preserves_order() {
        let value = parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#);
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Int(1).type_name(), "integer");
        assert_eq!(Value::Float(1.5).type_name(), "number");
        assert_eq!(Value::List(vec![]).type_name(), "list");
        assert_eq!(Value::Reference(BlockRef::new("x")).type_name(), "reference");
    }

    #[test]
    fn test_reference_serializes_without_kind_hint() {
        let json = serde_json::to_string(&Value::Reference(BlockRef::new("f"))).unwrap();
        assert_eq!(json, r#"{"$ref":"f"}"#);
    }
}
