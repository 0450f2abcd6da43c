//! Document, package and block types.

use serde::{Deserialize, Serialize};

use crate::{BlockRef, Fields, Value};

/// An IR document: an ordered list of packages.
///
/// The first package is the entry package; the application block is looked
/// up there. References may point into any package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    /// IR format version written by the parser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Packages in declaration order.
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl Spec {
    /// Create a document from a list of packages.
    pub fn new(packages: Vec<Package>) -> Self {
        Self {
            version: None,
            packages,
        }
    }

    /// The entry package (`packages[0]`), if any.
    pub fn entry_package(&self) -> Option<&Package> {
        self.packages.first()
    }

    /// Iterate every block of every package in declaration order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.packages.iter().flat_map(|p| p.blocks.iter())
    }

    /// Find the first block with the given name, regardless of kind.
    pub fn find_block(&self, name: &str) -> Option<&Block> {
        self.blocks().find(|b| b.name == name)
    }

    /// Find the first block with the given kind and name.
    pub fn find_block_of_kind(&self, kind: &str, name: &str) -> Option<&Block> {
        self.blocks().find(|b| b.kind == kind && b.name == name)
    }
}

/// A package: an ordered list of blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Package name, if the parser assigned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Blocks in declaration order.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Package {
    /// Create an unnamed package holding the given blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { name: None, blocks }
    }

    /// Iterate the blocks with the given kind discriminator.
    pub fn blocks_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Block> {
        self.blocks.iter().filter(move |b| b.kind == kind)
    }
}

/// A named, kind-tagged unit of the IR.
///
/// Fields are kept in a separate bag so that a field called `kind` (as on
/// providers) never collides with the block discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Kind discriminator, e.g. `"function"`.
    pub kind: String,
    /// Block name, unique per kind by convention.
    pub name: String,
    /// Untyped field payload.
    #[serde(default)]
    pub fields: Fields,
}

impl Block {
    /// Create a block with no fields.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            fields: Fields::new(),
        }
    }

    /// Add a field, returning the block.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// A reference to this block carrying its kind as hint.
    pub fn reference(&self) -> BlockRef {
        BlockRef::with_kind(&self.name, &self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Spec {
        Spec::new(vec![
            Package::new(vec![
                Block::new("application", "app").with_field("name", "demo"),
                Block::new("function", "hello").with_field("runtime", "nodejs"),
            ]),
            Package::new(vec![
                Block::new("provider", "hello"),
                Block::new("provider", "aliyun").with_field("kind", "aliyun"),
            ]),
        ])
    }

    #[test]
    fn test_entry_package() {
        let spec = sample();
        assert_eq!(spec.entry_package().unwrap().blocks.len(), 2);
        assert!(Spec::default().entry_package().is_none());
    }

    #[test]
    fn test_blocks_spans_packages() {
        let names: Vec<_> = sample().blocks().map(|b| b.name.clone()).collect();
        assert_eq!(names, vec!["app", "hello", "hello", "aliyun"]);
    }

    #[test]
    fn test_find_block_first_match() {
        let spec = sample();
        assert_eq!(spec.find_block("hello").unwrap().kind, "function");
        assert_eq!(
            spec.find_block_of_kind("provider", "hello").unwrap().kind,
            "provider"
        );
        assert!(spec.find_block("missing").is_none());
    }

    #[test]
    fn test_blocks_of_kind() {
        let spec = sample();
        let pkg = spec.entry_package().unwrap();
        assert_eq!(pkg.blocks_of_kind("function").count(), 1);
        assert_eq!(pkg.blocks_of_kind("event").count(), 0);
    }

    #[test]
    fn test_provider_kind_field_does_not_clash() {
        let json = r#"{
            "packages": [{
                "blocks": [
                    {"kind": "provider", "name": "aliyun", "fields": {"kind": "aliyun"}}
                ]
            }]
        }"#;
        let spec: Spec = serde_json::from_str(json).unwrap();
        let block = spec.find_block("aliyun").unwrap();
        assert_eq!(block.kind, "provider");
        assert_eq!(block.fields["kind"], Value::from("aliyun"));
    }

    #[test]
    fn test_block_reference_hint() {
        let block = Block::new("workflow", "wf");
        assert_eq!(block.reference(), BlockRef::with_kind("wf", "workflow"));
    }
}
