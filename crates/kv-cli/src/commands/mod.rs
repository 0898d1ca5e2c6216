//! Command implementations.

mod completions;
mod current;
mod install;
mod list;
mod use_version;

use crate::cli::{Cli, Commands, GlobalArgs};
use anyhow::Result;
use kv_config::Config;
use kv_core::EnvVars;
use kv_toolchain::{HttpFetcher, InstallOptions, PathAdvice, VersionManager};
use kv_ui::{Output, Printer, Verbosity, configure_colors};
use std::time::Duration;
use tracing::debug;

/// Everything a command needs, resolved once per invocation.
pub struct Context {
    pub manager: VersionManager<HttpFetcher>,
    pub config: Config,
}

impl Context {
    fn load(global: &GlobalArgs, printer: Printer) -> kv_core::Result<Self> {
        let config = Config::load(global.config_file.as_deref())?;
        let remote = &config.settings.remote;
        let fetcher = HttpFetcher::new(Duration::from_secs(remote.timeout))?;

        let manager = VersionManager::new(config.layout.clone(), fetcher)
            .with_releases_url(remote.releases_url.clone())
            .with_install_options(InstallOptions {
                download_url: remote.download_url.clone(),
                platform: None,
                printer,
            })
            .with_search_path(std::env::var_os(EnvVars::PATH));

        debug!(
            releases_url = %remote.releases_url,
            download_url = %remote.download_url,
            "Loaded configuration"
        );
        Ok(Self { manager, config })
    }
}

/// Run the CLI command.
pub async fn run(cli: Cli) -> Result<i32> {
    let printer = Printer::from_flags(cli.global.quiet, cli.global.verbose);
    let output = Output::with_verbosity(if printer.is_verbose() {
        Verbosity::Verbose
    } else if printer.is_quiet() {
        Verbosity::Quiet
    } else {
        Verbosity::Normal
    });
    configure_colors(cli.global.no_color);

    match run_command(cli.command, &cli.global, printer, &output).await {
        Ok(code) => Ok(code),
        Err(e) => {
            output.print_error(&e);
            Ok(e.exit_code().into())
        }
    }
}

/// Dispatch a command. Configuration is only loaded by commands that touch
/// the version store.
async fn run_command(
    command: Commands,
    global: &GlobalArgs,
    printer: Printer,
    output: &Output,
) -> kv_core::Result<i32> {
    match command {
        Commands::Completions { shell } => completions::run(shell),
        Commands::Use { target_version } => {
            let ctx = Context::load(global, printer)?;
            use_version::run(&ctx, &target_version, output)
        }
        Commands::List { installed } => {
            let ctx = Context::load(global, printer)?;
            if installed {
                list::installed(&ctx, output)
            } else {
                list::run(&ctx, output).await
            }
        }
        Commands::Install {
            target_version,
            activate,
        } => {
            let ctx = Context::load(global, printer)?;
            install::run(&ctx, &target_version, activate, output).await
        }
        Commands::Current => {
            let ctx = Context::load(global, printer)?;
            current::run(&ctx, output)
        }
    }
}

/// Print PATH setup instructions when the bin directory is not on `PATH`.
pub(crate) fn print_path_advice(advice: Option<&PathAdvice>, output: &Output) {
    if let Some(advice) = advice {
        output.advice(
            "kubeversion's bin directory is not in your PATH",
            &advice.lines,
        );
    }
}
