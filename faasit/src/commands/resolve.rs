use clap::Args;
use eyre::{Context, Result};
use faasit_spec::resolve_application;
use serde::Serialize;

use super::{IrArgs, UnwrapOrExit};
use crate::ops;

#[derive(Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub ir: IrArgs,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Replace references with the blocks they point to
    #[arg(long)]
    pub expand: bool,
}

impl ResolveCommand {
    pub fn run(&self) -> Result<()> {
        let ir = self.ir.open();
        let app = resolve_application(ir.spec()).unwrap_or_exit();

        let json = if self.expand {
            let expanded = ops::expand(ir.spec(), app).unwrap_or_exit();
            self.render(&expanded)?
        } else {
            self.render(&app)?
        };
        println!("{}", json);

        Ok(())
    }

    fn render(&self, value: &impl Serialize) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.wrap_err("Failed to serialize application")
    }
}
