//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from application info.
#[derive(Debug)]
pub struct InfoReport {
    /// Display name, or the application block name.
    pub name: String,
    pub ir_path: PathBuf,
    pub default_provider: ProviderInfo,
    /// Providers other than the default one.
    pub providers: Vec<ProviderInfo>,
    pub functions: Vec<FunctionInfo>,
    pub workflow: Option<WorkflowInfo>,
    pub input_examples: usize,
    pub stats: Stats,
}

#[derive(Debug)]
pub struct ProviderInfo {
    pub name: String,
    /// `None` when the reference does not resolve.
    pub kind: Option<String>,
}

#[derive(Debug)]
pub struct FunctionInfo {
    pub name: String,
    /// `None` when the reference does not resolve.
    pub runtime: Option<String>,
    pub triggers: Vec<String>,
}

#[derive(Debug)]
pub struct WorkflowInfo {
    pub name: String,
    pub functions: Vec<FunctionInfo>,
}

/// Document statistics.
#[derive(Debug, Default)]
pub struct Stats {
    pub packages: usize,
    /// Block counts per kind, in first-seen order.
    pub blocks: Vec<(String, usize)>,
}

const UNRESOLVED: &str = "<unresolved>";

impl ProviderInfo {
    fn describe(&self) -> String {
        format!("{} ({})", self.name, self.kind.as_deref().unwrap_or(UNRESOLVED))
    }
}

impl FunctionInfo {
    fn describe(&self) -> String {
        let mut text = format!(
            "{} ({})",
            self.name,
            self.runtime.as_deref().unwrap_or(UNRESOLVED)
        );
        if !self.triggers.is_empty() {
            text.push_str(&format!(" [{}]", self.triggers.join(", ")));
        }
        text
    }
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();

        // Header
        out.preformatted(&format!("  {}", self.name));
        out.preformatted(&format!("  {}", "─".repeat(self.name.chars().count())));
        out.newline();

        // Metadata
        let kind = if self.workflow.is_some() {
            "workflow"
        } else {
            "functions"
        };
        out.preformatted(&format!("  Kind        {}", kind));
        out.preformatted(&format!("  Provider    {}", self.default_provider.describe()));
        out.preformatted(&format!("  IR          {}", self.ir_path.display()));
        if self.input_examples > 0 {
            out.preformatted(&format!("  Examples    {}", self.input_examples));
        }
        out.newline();

        if !self.providers.is_empty() {
            out.preformatted("  Providers");
            out.preformatted("  ─────────");
            for provider in &self.providers {
                out.list_item(&provider.describe());
            }
            out.newline();
        }

        if !self.functions.is_empty() {
            out.preformatted("  Functions");
            out.preformatted("  ─────────");
            for function in &self.functions {
                out.list_item(&function.describe());
            }
            out.newline();
        }

        if let Some(workflow) = &self.workflow {
            out.preformatted(&format!("  Workflow {}", workflow.name));
            out.preformatted(&format!("  {}", "─".repeat(9 + workflow.name.chars().count())));
            for function in &workflow.functions {
                out.list_item(&function.describe());
            }
            out.newline();
        }

        // Statistics
        out.preformatted("  Statistics");
        out.preformatted("  ──────────");
        out.preformatted(&format!("  Packages    {}", self.stats.packages));
        for (kind, count) in &self.stats.blocks {
            out.preformatted(&format!("  {:<12}{}", kind, count));
        }
    }
}
