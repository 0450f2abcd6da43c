//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from validating and linting an IR document.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the IR document.
    pub ir_path: PathBuf,
    /// Name of the application block.
    pub application: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ application '{}' in {} is valid",
                self.application,
                self.ir_path.display()
            ));
        } else {
            out.preformatted(&format!(
                "✗ {} error{} in {}",
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" },
                self.ir_path.display()
            ));
        }
    }
}
