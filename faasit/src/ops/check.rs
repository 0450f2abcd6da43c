//! Check operation - application validation and lints.

use std::path::Path;

use faasit_ir::Spec;
use faasit_spec::{
    Result,
    lint::{Checker, Severity},
};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Resolves the application and runs every lint, collecting diagnostics.
/// Failing to resolve the application at all is returned as an error.
pub fn check(spec: &Spec, ir_path: &Path) -> Result<CheckReport> {
    let analysis = Checker::new().run(spec)?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &analysis.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        ir_path: ir_path.to_path_buf(),
        application: super::application_block_name(spec)
            .unwrap_or_default()
            .to_string(),
        errors,
        warnings,
        infos,
    })
}
