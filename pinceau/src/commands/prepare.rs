use std::path::PathBuf;

use clap::Args;
use eyre::{Result, WrapErr};
use pinceau_codegen_typescript::prepare_output_dir;
use pinceau_config::{PinceauOptions, PinceauToml};

use super::UnwrapOrExit;
use crate::reports::StageReport;

#[derive(Args)]
pub struct PrepareCommand {
    /// Project root that relative paths resolve against (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Path to pinceau.toml (defaults to <root>/pinceau.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory, overriding the configuration
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl PrepareCommand {
    pub fn run(&self) -> Result<()> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().wrap_err("Failed to read current directory")?,
        };

        let options = self.options(&root);
        let staged = prepare_output_dir(&options, &root).wrap_err("Failed to prepare outputs")?;

        print!("{}", StageReport::prepared(staged));
        Ok(())
    }

    fn options(&self, root: &std::path::Path) -> PinceauOptions {
        let options = match &self.config {
            Some(path) => PinceauToml::open(path).unwrap_or_exit().into_options(),
            None => PinceauOptions::load(root).unwrap_or_exit(),
        };

        match &self.output_dir {
            Some(dir) => options.with_output_dir(dir),
            None => options,
        }
    }
}
