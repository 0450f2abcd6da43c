//! Whole-document checks on top of schema validation.
//!
//! Validation stops at the first violation and never follows references.
//! The [`Checker`] resolves the application and then runs every registered
//! [`Lint`], collecting all findings instead of stopping early.

mod diagnostic;
mod lint;
pub mod lints;

use faasit_ir::Spec;
use tracing::debug;

pub use diagnostic::{Diagnostic, Severity};
pub use lint::{Lint, LintInfo};
pub use lints::{
    DanglingReferenceLint, DefaultProviderLint, DuplicateBlockLint, EmptyWorkflowLint,
};

use crate::{Application, Result, resolve_application};

/// Runs lints against an IR document.
pub struct Checker {
    lints: Vec<Box<dyn Lint>>,
}

impl Checker {
    /// Create a checker with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DanglingReferenceLint),
                Box::new(DuplicateBlockLint),
                Box::new(DefaultProviderLint),
                Box::new(EmptyWorkflowLint),
            ],
        }
    }

    /// Create a checker with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Resolve the application and run every lint against it.
    ///
    /// Failing to resolve the application is an error; lint findings, even
    /// error-level ones, are returned in the [`Analysis`].
    pub fn run(&self, spec: &Spec) -> Result<Analysis> {
        let application = resolve_application(spec)?;
        let diagnostics = self.check(spec, &application);
        Ok(Analysis {
            application,
            diagnostics,
        })
    }

    /// Run every lint against an already resolved application.
    pub fn check(&self, spec: &Spec, app: &Application) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            let before = diagnostics.len();
            lint.check(spec, app, &mut diagnostics);
            debug!(
                lint = lint.name(),
                found = diagnostics.len() - before,
                "ran lint"
            );
        }
        diagnostics
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

/// The resolved application and everything the lints found.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub application: Application,
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use faasit_ir::{Block, BlockRef, Package};

    use super::*;

    fn spec(blocks: Vec<Block>) -> Spec {
        Spec::new(vec![Package::new(blocks)])
    }

    fn application() -> Block {
        Block::new("application", "app").with_field("defaultProvider", BlockRef::new("aliyun"))
    }

    #[test]
    fn test_default_lints() {
        let names = Checker::new().lint_names();
        assert_eq!(
            names,
            vec![
                "dangling-reference",
                "duplicate-block",
                "default-provider-listed",
                "empty-workflow"
            ]
        );
        assert!(Checker::empty().lint_names().is_empty());
    }

    #[test]
    fn test_clean_document() {
        let spec = spec(vec![
            application(),
            Block::new("provider", "aliyun").with_field("kind", "aliyun"),
        ]);
        let analysis = Checker::new().run(&spec).unwrap();
        assert!(analysis.diagnostics.is_empty());
        assert!(!analysis.has_errors());
        assert_eq!(analysis.application.default_provider.name(), "aliyun");
    }

    #[test]
    fn test_errors_collected_not_raised() {
        let analysis = Checker::new().run(&spec(vec![application()])).unwrap();
        assert!(analysis.has_errors());
        assert_eq!(analysis.error_count(), 1);
        assert_eq!(analysis.warning_count(), 0);
    }

    #[test]
    fn test_missing_application_is_fatal() {
        assert!(Checker::new().run(&Spec::default()).is_err());
    }

    #[test]
    fn test_custom_lint() {
        struct NamedLint;
        impl Lint for NamedLint {
            fn name(&self) -> &'static str {
                "application-named"
            }
            fn description(&self) -> &'static str {
                "Require a display name"
            }
            fn check(&self, _spec: &Spec, app: &Application, diagnostics: &mut Vec<Diagnostic>) {
                if app.name.is_none() {
                    diagnostics.push(Diagnostic::info(self.name(), "application has no name"));
                }
            }
        }

        let checker = Checker::empty().with_lint(NamedLint);
        let analysis = checker.run(&spec(vec![application()])).unwrap();
        assert_eq!(analysis.diagnostics.len(), 1);
        assert!(!analysis.has_errors());
        assert!(!analysis.has_warnings());
        assert_eq!(checker.lint_info()[0].description, "Require a display name");
    }
}
