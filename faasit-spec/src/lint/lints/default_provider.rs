//! Lint for a default provider missing from the provider list.

use faasit_ir::Spec;

use super::super::{Diagnostic, Lint};
use crate::Application;

/// Lint that warns when `providers` is given but omits `defaultProvider`.
///
/// An empty `providers` list is fine: the default provider is then the only
/// candidate.
pub struct DefaultProviderLint;

impl Lint for DefaultProviderLint {
    fn name(&self) -> &'static str {
        "default-provider-listed"
    }

    fn description(&self) -> &'static str {
        "Check that the default provider appears in the provider list"
    }

    fn check(&self, _spec: &Spec, app: &Application, diagnostics: &mut Vec<Diagnostic>) {
        if app.providers.is_empty() || app.providers.contains(&app.default_provider) {
            return;
        }
        diagnostics.push(
            Diagnostic::warning(
                self.name(),
                format!(
                    "default provider '{}' is not listed in providers",
                    app.default_provider.name()
                ),
            )
            .at("application.defaultProvider"),
        );
    }
}

#[cfg(test)]
mod tests {
    use faasit_ir::{Block, BlockRef, Package, Value};

    use super::*;
    use crate::resolve_application;

    fn check(providers: &[&str]) -> Vec<Diagnostic> {
        let spec = Spec::new(vec![Package::new(vec![
            Block::new("application", "app")
                .with_field("defaultProvider", BlockRef::new("aliyun"))
                .with_field(
                    "providers",
                    Value::List(providers.iter().map(|p| BlockRef::new(*p).into()).collect()),
                ),
        ])]);
        let app = resolve_application(&spec).unwrap();
        let mut diagnostics = Vec::new();
        DefaultProviderLint.check(&spec, &app, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_empty_providers() {
        assert!(check(&[]).is_empty());
    }

    #[test]
    fn test_listed() {
        assert!(check(&["knative", "aliyun"]).is_empty());
    }

    #[test]
    fn test_not_listed() {
        let diagnostics = check(&["knative"]);
        assert_eq!(diagnostics.len(), 1);
        insta::assert_snapshot!(
            diagnostics[0].to_string(),
            @"warning[default-provider-listed]: default provider 'aliyun' is not listed in providers (at application.defaultProvider)"
        );
    }
}
