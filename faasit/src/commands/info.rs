use clap::Args;
use eyre::Result;

use super::{IrArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    #[command(flatten)]
    pub ir: IrArgs,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let ir = self.ir.open();
        let report = ops::info(ir.spec(), ir.path()).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
