//! Lint for workflows that orchestrate nothing.

use faasit_ir::Spec;

use super::super::{Diagnostic, Lint};
use crate::{Application, Resolver};

/// Lint that warns when a workflow application's workflow has no functions.
pub struct EmptyWorkflowLint;

impl Lint for EmptyWorkflowLint {
    fn name(&self) -> &'static str {
        "empty-workflow"
    }

    fn description(&self) -> &'static str {
        "Warn about workflows with no functions"
    }

    fn check(&self, spec: &Spec, app: &Application, diagnostics: &mut Vec<Diagnostic>) {
        let Some(reference) = &app.workflow else {
            return;
        };
        // Unresolvable workflows are reported by the dangling-reference lint.
        let Ok(workflow) = reference.resolve(&Resolver::new(spec)) else {
            return;
        };
        if workflow.functions.is_empty() {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!("workflow '{}' has no functions", reference.name()),
                )
                .at(format!("workflow.{}.functions", reference.name())),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use faasit_ir::{Block, BlockRef, Package, Value};

    use super::*;
    use crate::resolve_application;

    fn check(extra: Vec<Block>) -> Vec<Diagnostic> {
        let mut blocks = vec![
            Block::new("application", "app")
                .with_field("defaultProvider", BlockRef::new("aliyun"))
                .with_field("workflow", BlockRef::new("wf")),
        ];
        blocks.extend(extra);
        let spec = Spec::new(vec![Package::new(blocks)]);
        let app = resolve_application(&spec).unwrap();
        let mut diagnostics = Vec::new();
        EmptyWorkflowLint.check(&spec, &app, &mut diagnostics);
        diagnostics
    }

    fn workflow(functions: Vec<Value>) -> Block {
        Block::new("workflow", "wf")
            .with_field("runtime", "python")
            .with_field("codeDir", "./wf")
            .with_field("functions", Value::List(functions))
    }

    #[test]
    fn test_empty_workflow() {
        let diagnostics = check(vec![workflow(vec![])]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("workflow.wf.functions"));
    }

    #[test]
    fn test_workflow_with_functions() {
        assert!(check(vec![workflow(vec![BlockRef::new("split").into()])]).is_empty());
    }

    #[test]
    fn test_missing_workflow_ignored() {
        assert!(check(vec![]).is_empty());
    }
}
