//! Typed, lazily resolved references between blocks.

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use faasit_ir::{Block, BlockRef, Spec};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::{BlockKind, Entity, Error, Result, entity::parse_block};

/// A typed pointer to a block of kind `T::KIND`, by name.
///
/// A reference never owns its target. Validating a reference only checks its
/// shape; the target is looked up and validated when [`Reference::resolve`]
/// is called, so forward references and cycles cost nothing up front.
pub struct Reference<T> {
    name: String,
    marker: PhantomData<fn() -> T>,
}

impl<T> Reference<T> {
    /// Create a reference to the block with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: PhantomData,
        }
    }

    /// The target block's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Entity> Reference<T> {
    /// The target block's kind.
    pub fn kind(&self) -> BlockKind {
        T::KIND
    }

    /// The raw IR form of this reference, with its kind hint.
    pub fn to_block_ref(&self) -> BlockRef {
        BlockRef::with_kind(&self.name, T::KIND.as_str())
    }

    /// Look up the target block and validate it.
    ///
    /// Fails with [`Error::DanglingReference`] when no block has this name,
    /// [`Error::KindMismatch`] when the name belongs to a block of another
    /// kind, or with the target's own schema violation.
    pub fn resolve(&self, resolver: &Resolver<'_>) -> Result<T> {
        resolver.resolve(self)
    }
}

impl<T> Clone for Reference<T> {
    fn clone(&self) -> Self {
        Self::new(self.name.clone())
    }
}

impl<T> PartialEq for Reference<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Reference<T> {}

impl<T> Hash for Reference<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<T> fmt::Debug for Reference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reference").field(&self.name).finish()
    }
}

impl<T: Entity> Serialize for Reference<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_block_ref().serialize(serializer)
    }
}

impl<'de, T: Entity> Deserialize<'de> for Reference<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = BlockRef::deserialize(deserializer)?;
        if let Some(kind) = &raw.kind
            && kind != T::KIND.as_str()
        {
            return Err(serde::de::Error::custom(format!(
                "expected reference to {}, found reference to {}",
                T::KIND,
                kind
            )));
        }
        Ok(Self::new(raw.name))
    }
}

/// Looks up reference targets within an IR document.
///
/// Every package is searched in declaration order and the first block with a
/// matching name wins.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    spec: &'a Spec,
}

impl<'a> Resolver<'a> {
    pub fn new(spec: &'a Spec) -> Self {
        Self { spec }
    }

    /// The document references are resolved against.
    pub fn spec(&self) -> &'a Spec {
        self.spec
    }

    /// Find the block of the given kind and name.
    pub fn block(&self, kind: BlockKind, name: &str) -> Result<&'a Block> {
        let mut other_kind = None;
        for block in self.spec.blocks().filter(|b| b.name == name) {
            if block.kind == kind.as_str() {
                return Ok(block);
            }
            other_kind.get_or_insert(block.kind.as_str());
        }
        match other_kind {
            Some(actual) => Err(Error::kind_mismatch(name, kind, actual)),
            None => Err(Error::dangling(kind, name)),
        }
    }

    /// Resolve a single reference to its validated target.
    pub fn resolve<T: Entity>(&self, reference: &Reference<T>) -> Result<T> {
        debug!(kind = %T::KIND, name = reference.name(), "resolving reference");
        let block = self.block(T::KIND, reference.name())?;
        parse_block(block)
    }

    /// Resolve a list of references, stopping at the first failure.
    pub fn resolve_all<T: Entity>(&self, references: &[Reference<T>]) -> Result<Vec<T>> {
        references.iter().map(|r| self.resolve(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use faasit_ir::{Package, Value};

    use super::*;
    use crate::{Function, Provider, Workflow};

    fn spec() -> Spec {
        Spec::new(vec![
            Package::new(vec![
                Block::new("function", "hello").with_field("runtime", "nodejs"),
                Block::new("function", "broken").with_field("runtime", Value::Int(1)),
            ]),
            Package::new(vec![
                Block::new("provider", "aliyun").with_field("kind", "aliyun"),
                Block::new("workflow", "later")
                    .with_field("runtime", "python")
                    .with_field("codeDir", "./wf")
                    .with_field(
                        "functions",
                        Value::List(vec![BlockRef::new("hello").into()]),
                    ),
            ]),
        ])
    }

    #[test]
    fn test_resolve_across_packages() {
        let spec = spec();
        let resolver = Resolver::new(&spec);
        let provider = Reference::<Provider>::new("aliyun").resolve(&resolver).unwrap();
        assert_eq!(provider.kind, "aliyun");
    }

    #[test]
    fn test_resolve_dangling() {
        let spec = spec();
        let resolver = Resolver::new(&spec);
        let err = Reference::<Provider>::new("aws").resolve(&resolver).unwrap_err();
        assert!(matches!(*err, Error::DanglingReference { kind: BlockKind::Provider, ref name } if name == "aws"));
    }

    #[test]
    fn test_resolve_wrong_kind() {
        let spec = spec();
        let resolver = Resolver::new(&spec);
        let err = Reference::<Provider>::new("hello").resolve(&resolver).unwrap_err();
        match *err {
            Error::KindMismatch {
                name,
                expected,
                actual,
            } => {
                assert_eq!(name, "hello");
                assert_eq!(expected, BlockKind::Provider);
                assert_eq!(actual, "function");
            }
            other => panic!("expected kind mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_invalid_target() {
        let spec = spec();
        let resolver = Resolver::new(&spec);
        let err = Reference::<Function>::new("broken").resolve(&resolver).unwrap_err();
        assert_eq!(err.path(), Some("function.broken.runtime"));
    }

    #[test]
    fn test_resolve_nested_reference_lazily() {
        let spec = spec();
        let resolver = Resolver::new(&spec);
        let workflow = Reference::<Workflow>::new("later").resolve(&resolver).unwrap();
        let functions = resolver.resolve_all(&workflow.functions).unwrap();
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].runtime, "nodejs");
    }

    #[test]
    fn test_reference_equality_ignores_nothing_but_name() {
        assert_eq!(Reference::<Function>::new("a"), Reference::<Function>::new("a"));
        assert_ne!(Reference::<Function>::new("a"), Reference::<Function>::new("b"));
    }

    #[test]
    fn test_reference_serde() {
        let reference = Reference::<Function>::new("hello");
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, r#"{"$ref":"hello","$kind":"function"}"#);

        let back: Reference<Function> = serde_json::from_str(r#"{"$ref":"hello"}"#).unwrap();
        assert_eq!(back, reference);

        let wrong = serde_json::from_str::<Reference<Function>>(r#"{"$ref":"x","$kind":"event"}"#);
        assert!(wrong.is_err());
    }
}
