//! Printer abstraction for controlling output verbosity.

use indicatif::ProgressDrawTarget;

/// Output verbosity level derived from the global flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Printer {
    /// Suppress all output.
    Silent,
    /// Suppress most output but preserve important stdout.
    Quiet,
    /// Normal output (default).
    #[default]
    Normal,
    /// Verbose output including debug messages.
    Verbose,
}

impl Printer {
    /// Create a printer from quiet/verbose flags.
    pub fn from_flags(quiet: u8, verbose: bool) -> Self {
        if quiet >= 2 {
            Self::Silent
        } else if quiet == 1 {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Get the progress bar draw target for this printer.
    ///
    /// Verbose mode hides bars so they do not interleave with log lines.
    pub fn target(self) -> ProgressDrawTarget {
        match self {
            Self::Silent | Self::Quiet | Self::Verbose => ProgressDrawTarget::hidden(),
            Self::Normal => ProgressDrawTarget::stderr(),
        }
    }

    /// Check if progress output is enabled.
    pub fn progress_enabled(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if verbose output is enabled.
    pub fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if quiet mode is active.
    pub fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet | Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(Printer::from_flags(0, false), Printer::Normal);
        assert_eq!(Printer::from_flags(0, true), Printer::Verbose);
        assert_eq!(Printer::from_flags(1, true), Printer::Quiet);
        assert_eq!(Printer::from_flags(2, false), Printer::Silent);
    }

    #[test]
    fn test_progress_only_in_normal_mode() {
        assert!(Printer::Normal.progress_enabled());
        assert!(!Printer::Verbose.progress_enabled());
        assert!(Printer::Silent.target().is_hidden());
        assert!(Printer::Quiet.is_quiet());
    }
}
