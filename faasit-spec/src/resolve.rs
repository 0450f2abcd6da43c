//! Locating and validating the application of an IR document.

use faasit_ir::{Fields, Spec};
use tracing::{debug, info};

use crate::{
    Application, BlockKind, Entity, Error, Result, entity::parse_fields, parse_block,
    validate::ValidateContext,
};

/// Find the single application block of the entry package and validate it.
///
/// Only the first package is scanned. No application block yields
/// [`Error::MissingApplication`]; more than one yields
/// [`Error::AmbiguousApplication`] naming all of them. References inside the
/// application are checked for shape only.
pub fn resolve_application(spec: &Spec) -> Result<Application> {
    let Some(entry) = spec.entry_package() else {
        debug!("IR document has no packages");
        return Err(Error::missing_application());
    };

    let candidates: Vec<_> = entry
        .blocks_of_kind(Application::KIND.as_str())
        .collect();
    debug!(
        blocks = entry.blocks.len(),
        applications = candidates.len(),
        "scanned entry package"
    );

    match candidates.as_slice() {
        [] => Err(Error::missing_application()),
        [block] => {
            let app = parse_block::<Application>(block)?;
            info!(
                application = %block.name,
                functions = app.functions.len(),
                workflow = app.is_workflow(),
                "resolved application"
            );
            Ok(app)
        }
        many => {
            let names: Vec<_> = many.iter().map(|b| b.name.as_str()).collect();
            Err(Error::ambiguous_application(&names))
        }
    }
}

/// Validate a raw application field bag without scanning a document.
pub fn parse_application(fields: &Fields) -> Result<Application> {
    parse_fields(fields, &ValidateContext::new().push(BlockKind::Application.as_str()))
}

/// Whether the application is orchestrated by a workflow.
pub fn is_workflow_application(app: &Application) -> bool {
    app.is_workflow()
}
