//! Output formatting for the kubeversion CLI.

use crate::style::Style;
use kv_core::error::{Error, Fix};
use std::error::Error as StdError;
use std::io::{self, Write};

/// Verbosity level for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Verbose output
    Verbose,
}

/// Output handler for consistent CLI output.
///
/// Status lines go to stderr. Errors and command results go to stdout.
#[derive(Debug, Clone, Default)]
pub struct Output {
    verbosity: Verbosity,
}

impl Output {
    /// Create an output handler with specified verbosity.
    pub fn with_verbosity(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Print a status message with a step title.
    pub fn status(&self, action: &str, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{:>12} {}", Style::bold(Style::success(action)), message);
        }
    }

    /// Print an info message.
    pub fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{}", message);
        }
    }

    /// Print a result line to stdout, regardless of verbosity.
    pub fn result(&self, message: &str) {
        println!("{}", message);
    }

    /// Print a structured error with its causes and fixes to stdout.
    pub fn print_error(&self, error: &Error) {
        let mut out = io::stdout().lock();
        let _ = self.write_error(&mut out, error);
    }

    fn write_error(&self, out: &mut impl Write, error: &Error) -> io::Result<()> {
        writeln!(out, "{}: {}", Style::error("error"), error)?;

        if let Some(path) = error.path() {
            writeln!(out, "  {} {}", Style::dim("-->"), path.display())?;
        }
        if let Some(url) = error.url() {
            writeln!(out, "  {} {}", Style::dim("url:"), url)?;
        }

        let mut cause = StdError::source(error);
        while let Some(err) = cause {
            writeln!(out, "  {} {}", Style::dim("caused by:"), err)?;
            cause = StdError::source(err);
        }

        let fixes = error.fixes();
        if !fixes.is_empty() {
            writeln!(out)?;
            for fix in fixes {
                write_fix(out, fix)?;
            }
        }
        Ok(())
    }

    /// Print an advisory block (e.g. PATH setup instructions).
    pub fn advice(&self, title: &str, lines: &[String]) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!();
            eprintln!("{}: {}", Style::warning("note"), title);
            for line in lines {
                eprintln!("  {}", Style::command(line));
            }
            eprintln!();
        }
    }
}

fn write_fix(out: &mut impl Write, fix: &Fix) -> io::Result<()> {
    if let Some(ref cmd) = fix.command {
        writeln!(out, "{}: Run `{}`", Style::info("fix"), Style::command(cmd))?;
        if fix.description != *cmd {
            writeln!(out, "      {}", Style::dim(&fix.description))?;
        }
    } else {
        writeln!(out, "{}: {}", Style::info("fix"), fix.description)?;
    }
    Ok(())
}
