//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod info;
mod output;

pub use check::CheckReport;
pub use info::{FunctionInfo, InfoReport, ProviderInfo, Stats, WorkflowInfo};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
