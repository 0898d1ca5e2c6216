//! kubeversion - kubectl version manager
//!
//! Installs kubectl releases side by side and switches between them.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod select;
mod styles;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize telemetry
    kv_telemetry::init(cli.global.verbose);

    let exit_code = commands::run(cli).await?;

    std::process::exit(exit_code);
}
