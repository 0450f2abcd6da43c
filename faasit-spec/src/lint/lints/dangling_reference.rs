//! Lint for references that do not resolve.

use faasit_ir::Spec;

use super::super::{Diagnostic, Lint};
use crate::{Application, Entity, Reference, Resolver};

/// Lint that errors on every reachable reference that fails to resolve.
///
/// Starts at the application and follows its providers, functions and
/// workflow, then each resolved function's events and the workflow's
/// functions. A target that exists but fails validation is reported too.
pub struct DanglingReferenceLint;

impl Lint for DanglingReferenceLint {
    fn name(&self) -> &'static str {
        "dangling-reference"
    }

    fn description(&self) -> &'static str {
        "Check that every reachable reference resolves to a valid block"
    }

    fn check(&self, spec: &Spec, app: &Application, diagnostics: &mut Vec<Diagnostic>) {
        let mut walker = Walker {
            resolver: Resolver::new(spec),
            lint: self.name(),
            diagnostics,
        };

        walker.visit(&app.default_provider, "application.defaultProvider");
        for (i, provider) in app.providers.iter().enumerate() {
            walker.visit(provider, &format!("application.providers[{}]", i));
        }

        for (i, function) in app.functions.iter().enumerate() {
            walker.visit_function(function, &format!("application.functions[{}]", i));
        }

        if let Some(workflow) = &app.workflow
            && let Some(resolved) = walker.visit(workflow, "application.workflow")
        {
            for (i, function) in resolved.functions.iter().enumerate() {
                let location = format!("workflow.{}.functions[{}]", workflow.name(), i);
                walker.visit_function(function, &location);
            }
        }
    }
}

struct Walker<'a, 'd> {
    resolver: Resolver<'a>,
    lint: &'static str,
    diagnostics: &'d mut Vec<Diagnostic>,
}

impl Walker<'_, '_> {
    fn visit<T: Entity>(&mut self, reference: &Reference<T>, location: &str) -> Option<T> {
        match reference.resolve(&self.resolver) {
            Ok(target) => Some(target),
            Err(err) => {
                self.diagnostics
                    .push(Diagnostic::error(self.lint, err.to_string()).at(location));
                None
            }
        }
    }

    fn visit_function(&mut self, reference: &Reference<crate::Function>, location: &str) {
        let Some(function) = self.visit(reference, location) else {
            return;
        };
        for (i, event) in function.events().iter().enumerate() {
            let location = format!("function.{}.pubsub.events[{}]", reference.name(), i);
            self.visit(event, &location);
        }
    }
}
