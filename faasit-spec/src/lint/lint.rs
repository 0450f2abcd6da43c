//! Lint trait for IR documents.

use faasit_ir::Spec;

use super::Diagnostic;
use crate::Application;

/// A lint that checks a resolved application for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint, e.g. `dangling-reference`.
    fn name(&self) -> &'static str;

    /// A one-line description for listings.
    fn description(&self) -> &'static str;

    /// Check the document and add any diagnostics.
    fn check(&self, spec: &Spec, app: &Application, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Name and description of a lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}
