use std::path::PathBuf;

use clap::Args;
use eyre::{Result, WrapErr};
use pinceau_codegen_typescript::stub_outputs;

use crate::reports::StageReport;

#[derive(Args)]
pub struct StubCommand {
    /// Output directory to stub (must exist, see `pinceau prepare`)
    pub dir: PathBuf,

    /// Replace existing outputs with placeholders
    #[arg(short, long)]
    pub force: bool,
}

impl StubCommand {
    pub fn run(&self) -> Result<()> {
        let files = stub_outputs(&self.dir, self.force)
            .wrap_err_with(|| format!("Failed to stub outputs in '{}'", self.dir.display()))?;

        print!("{}", StageReport::stubbed(self.dir.clone(), files));
        Ok(())
    }
}
