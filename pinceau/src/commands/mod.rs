mod prepare;
mod stub;

use clap::{Parser, Subcommand};
use eyre::Result;
use prepare::PrepareCommand;
use stub::StubCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pinceau_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "pinceau")]
#[command(version)]
#[command(about = "Stage theme outputs before token generation runs")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Prepare(cmd) => cmd.run(),
            Commands::Stub(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create the output directory and fill missing outputs with placeholders
    Prepare(PrepareCommand),

    /// Write placeholder outputs into an existing directory
    Stub(StubCommand),
}
