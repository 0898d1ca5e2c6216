//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::Shell;
use kv_core::Result;

use crate::cli::Cli;

/// Print completions for `shell` to stdout.
pub fn run(shell: Shell) -> Result<i32> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());

    Ok(0)
}
