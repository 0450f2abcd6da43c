//! Lint for duplicate block declarations.

use std::collections::HashSet;

use faasit_ir::Spec;

use super::super::{Diagnostic, Lint};
use crate::Application;

/// Lint that warns when two blocks share a kind and a name.
///
/// Reference lookup takes the first declaration, so later ones are
/// unreachable.
pub struct DuplicateBlockLint;

impl Lint for DuplicateBlockLint {
    fn name(&self) -> &'static str {
        "duplicate-block"
    }

    fn description(&self) -> &'static str {
        "Detect blocks declared twice with the same kind and name"
    }

    fn check(&self, spec: &Spec, _app: &Application, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for block in spec.blocks() {
            let key = (block.kind.as_str(), block.name.as_str());
            if !seen.insert(key) && reported.insert(key) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "duplicate {} block '{}'; only the first declaration is used",
                            block.kind, block.name
                        ),
                    )
                    .at(format!("{}.{}", block.kind, block.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use faasit_ir::{Block, BlockRef, Package};

    use super::*;
    use crate::resolve_application;

    fn check(packages: Vec<Package>) -> Vec<Diagnostic> {
        let spec = Spec::new(packages);
        let app = resolve_application(&spec).unwrap();
        let mut diagnostics = Vec::new();
        DuplicateBlockLint.check(&spec, &app, &mut diagnostics);
        diagnostics
    }

    fn application() -> Block {
        Block::new("application", "app").with_field("defaultProvider", BlockRef::new("aliyun"))
    }

    #[test]
    fn test_same_name_different_kind_allowed() {
        let diagnostics = check(vec![Package::new(vec![
            application(),
            Block::new("function", "hello"),
            Block::new("event", "hello"),
        ])]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_across_packages_reported_once() {
        let diagnostics = check(vec![
            Package::new(vec![application(), Block::new("function", "hello")]),
            Package::new(vec![Block::new("function", "hello")]),
            Package::new(vec![Block::new("function", "hello")]),
        ]);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].location.as_deref(), Some("function.hello"));
    }
}
