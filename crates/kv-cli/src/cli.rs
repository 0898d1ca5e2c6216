//! CLI argument parsing.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use kv_core::EnvVars;

use crate::styles::STYLES;

/// kubeversion - kubectl version manager
#[derive(Parser, Debug)]
#[command(name = "kubeversion")]
#[command(author, version, about = "Kubectl version manager")]
#[command(
    long_about = "Kubeversion is a version manager for kubectl that allows you to switch between different versions easily."
)]
#[command(propagate_version = true)]
#[command(styles = STYLES)]
#[command(after_help = "Use `kubeversion help <command>` for more information about a command.")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true, env = EnvVars::KUBEVERSION_VERBOSE)]
    pub verbose: bool,

    /// Suppress output (use twice for complete silence)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, env = EnvVars::KUBEVERSION_QUIET)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true, env = EnvVars::KUBEVERSION_NO_COLOR)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = EnvVars::KUBEVERSION_CONFIG_FILE)]
    pub config_file: Option<std::path::PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Switch to specified kubectl version
    Use {
        /// Version to activate (e.g. 1.29.0 or v1.29.0)
        #[arg(value_name = "VERSION")]
        target_version: String,
    },

    /// List all available kubectl versions and pick one to use
    List {
        /// Only print installed versions, without prompting
        #[arg(long)]
        installed: bool,
    },

    /// Install specified kubectl version
    Install {
        /// Version to download (e.g. 1.29.0 or v1.29.0)
        #[arg(value_name = "VERSION")]
        target_version: String,

        /// Switch to the version once installed
        #[arg(long = "use")]
        activate: bool,
    },

    /// Show the active kubectl version
    Current,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_use_requires_exactly_one_version() {
        assert!(Cli::try_parse_from(["kubeversion", "use"]).is_err());
        assert!(Cli::try_parse_from(["kubeversion", "use", "1.29.0", "1.30.0"]).is_err());

        let cli = Cli::try_parse_from(["kubeversion", "use", "1.29.0"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Use { ref target_version } if target_version == "1.29.0"
        ));
    }

    #[test]
    fn test_install_with_use_flag() {
        let cli = Cli::try_parse_from(["kubeversion", "install", "v1.30.0", "--use"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Install { ref target_version, activate: true } if target_version == "v1.30.0"
        ));
    }

    #[test]
    fn test_subcommands_accept_version_flag() {
        // The propagated --version flag must not collide with positionals
        for args in [
            ["kubeversion", "use", "--version"],
            ["kubeversion", "install", "--version"],
        ] {
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["kubeversion", "list", "--installed", "-qq"]).unwrap();
        assert_eq!(cli.global.quiet, 2);
        assert!(matches!(cli.command, Commands::List { installed: true }));
    }
}
