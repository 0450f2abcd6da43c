//! Info operation - application summary.

use std::path::Path;

use faasit_ir::Spec;
use faasit_spec::{Function, Provider, Reference, Resolver, Result, resolve_application};

use crate::reports::{FunctionInfo, InfoReport, ProviderInfo, Stats, WorkflowInfo};

/// Execute the info operation.
///
/// References that do not resolve are reported as such rather than failing.
pub fn info(spec: &Spec, ir_path: &Path) -> Result<InfoReport> {
    let app = resolve_application(spec)?;
    let resolver = Resolver::new(spec);

    let name = app
        .name
        .clone()
        .or_else(|| super::application_block_name(spec).map(String::from))
        .unwrap_or_default();

    let providers = app
        .providers
        .iter()
        .filter(|p| **p != app.default_provider)
        .map(|p| provider_info(p, &resolver))
        .collect();

    let functions = app
        .functions
        .iter()
        .map(|f| function_info(f, &resolver))
        .collect();

    let workflow = app.workflow.as_ref().map(|reference| WorkflowInfo {
        name: reference.name().to_string(),
        functions: reference
            .resolve(&resolver)
            .map(|w| {
                w.functions
                    .iter()
                    .map(|f| function_info(f, &resolver))
                    .collect()
            })
            .unwrap_or_default(),
    });

    Ok(InfoReport {
        name,
        ir_path: std::fs::canonicalize(ir_path).unwrap_or_else(|_| ir_path.to_path_buf()),
        default_provider: provider_info(&app.default_provider, &resolver),
        providers,
        functions,
        workflow,
        input_examples: app.input_examples.len(),
        stats: collect_stats(spec),
    })
}

fn provider_info(reference: &Reference<Provider>, resolver: &Resolver<'_>) -> ProviderInfo {
    ProviderInfo {
        name: reference.name().to_string(),
        kind: reference.resolve(resolver).ok().map(|p| p.kind),
    }
}

fn function_info(reference: &Reference<Function>, resolver: &Resolver<'_>) -> FunctionInfo {
    match reference.resolve(resolver) {
        Ok(function) => FunctionInfo {
            name: reference.name().to_string(),
            runtime: Some(function.runtime),
            triggers: function.triggers.into_iter().map(|t| t.name).collect(),
        },
        Err(_) => FunctionInfo {
            name: reference.name().to_string(),
            runtime: None,
            triggers: Vec::new(),
        },
    }
}

fn collect_stats(spec: &Spec) -> Stats {
    let mut blocks: Vec<(String, usize)> = Vec::new();
    for block in spec.blocks() {
        match blocks.iter_mut().find(|(kind, _)| *kind == block.kind) {
            Some((_, count)) => *count += 1,
            None => blocks.push((block.kind.clone(), 1)),
        }
    }
    Stats {
        packages: spec.packages.len(),
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ops::fixtures,
        reports::{BufferOutput, Report},
    };

    #[test]
    fn test_info_report() {
        let spec = fixtures::spec(fixtures::FUNCTIONS_APP);
        let report = info(&spec, Path::new("does/not/exist.ir.json")).unwrap();

        assert_eq!(report.name, "hello-app");
        assert_eq!(report.providers.len(), 1);
        assert_eq!(report.input_examples, 1);
        assert!(report.workflow.is_none());

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "",
                "  hello-app",
                "  ─────────",
                "",
                "  Kind        functions",
                "  Provider    aliyun (aliyun)",
                "  IR          does/not/exist.ir.json",
                "  Examples    1",
                "",
                "  Providers",
                "  ─────────",
                "  - knative (knative)",
                "",
                "  Functions",
                "  ─────────",
                "  - hello (nodejs) [http]",
                "  - ghost (<unresolved>)",
                "",
                "  Statistics",
                "  ──────────",
                "  Packages    1",
                "  application 1",
                "  provider    2",
                "  function    1",
            ]
        );
    }

    #[test]
    fn test_info_workflow() {
        let spec = fixtures::spec(
            r#"{"packages":[{"blocks":[
                {"kind":"application","name":"wf-app","fields":{
                    "name":"Word Count",
                    "defaultProvider":{"$ref":"knative"},
                    "workflow":{"$ref":"wc"}}},
                {"kind":"workflow","name":"wc","fields":{
                    "functions":[{"$ref":"split"}],"runtime":"python","codeDir":"./wc"}},
                {"kind":"function","name":"split","fields":{"runtime":"python"}}
            ]}]}"#,
        );
        let report = info(&spec, Path::new("wf.ir.json")).unwrap();
        assert_eq!(report.name, "Word Count");
        assert_eq!(report.default_provider.kind, None);

        let workflow = report.workflow.as_ref().unwrap();
        assert_eq!(workflow.name, "wc");
        assert_eq!(workflow.functions[0].runtime.as_deref(), Some("python"));
    }
}
