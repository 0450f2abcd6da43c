//! Resolve operation - application with its references expanded.

use faasit_ir::{Fields, Spec};
use faasit_spec::{
    Application, Entity, Function, InputExample, Provider, Reference, Resolver, Result, Workflow,
};
use serde::Serialize;

/// A resolved block together with its name.
#[derive(Debug, Serialize)]
pub struct Named<T> {
    pub name: String,
    #[serde(flatten)]
    pub value: T,
}

/// An application whose direct references are replaced by their targets.
///
/// Only one level is expanded: the workflow keeps its function references.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub default_provider: Named<Provider>,
    pub providers: Vec<Named<Provider>>,
    pub functions: Vec<Named<Function>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<Named<Workflow>>,
    pub input_examples: Vec<InputExample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Fields>,
}

/// Resolve every direct reference of the application.
///
/// Fails on the first reference that does not resolve.
pub fn expand(spec: &Spec, app: Application) -> Result<ExpandedApplication> {
    let resolver = Resolver::new(spec);

    Ok(ExpandedApplication {
        name: app.name,
        default_provider: named(&app.default_provider, &resolver)?,
        providers: app
            .providers
            .iter()
            .map(|r| named(r, &resolver))
            .collect::<Result<_>>()?,
        functions: app
            .functions
            .iter()
            .map(|r| named(r, &resolver))
            .collect::<Result<_>>()?,
        workflow: app
            .workflow
            .as_ref()
            .map(|r| named(r, &resolver))
            .transpose()?,
        input_examples: app.input_examples,
        options: app.options,
    })
}

fn named<T: Entity>(reference: &Reference<T>, resolver: &Resolver<'_>) -> Result<Named<T>> {
    Ok(Named {
        name: reference.name().to_string(),
        value: reference.resolve(resolver)?,
    })
}

#[cfg(test)]
mod tests {
    use faasit_spec::resolve_application;

    use super::*;
    use crate::ops::fixtures;

    #[test]
    fn test_expand() {
        let spec = fixtures::spec(
            r#"{"packages":[{"blocks":[
                {"kind":"application","name":"app","fields":{
                    "defaultProvider":{"$ref":"oss"},
                    "functions":[{"$ref":"hello"}]}},
                {"kind":"provider","name":"oss","fields":{"kind":"oss","bucket":"b1","customTag":"x"}},
                {"kind":"function","name":"hello","fields":{"runtime":"nodejs"}}
            ]}]}"#,
        );
        let app = resolve_application(&spec).unwrap();
        let expanded = expand(&spec, app).unwrap();

        let json = serde_json::to_string(&expanded).unwrap();
        insta::assert_snapshot!(json, @r#"{"defaultProvider":{"name":"oss","kind":"oss","bucket":"b1","customTag":"x"},"providers":[],"functions":[{"name":"hello","runtime":"nodejs","codeDir":"","triggers":[]}],"inputExamples":[]}"#);
    }

    #[test]
    fn test_expand_fails_on_dangling() {
        let spec = fixtures::spec(fixtures::FUNCTIONS_APP);
        let app = resolve_application(&spec).unwrap();
        let err = expand(&spec, app).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"no function block named 'ghost'");
    }
}
