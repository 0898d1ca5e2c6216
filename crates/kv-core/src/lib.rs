//! Core types for kubeversion.
//!
//! This crate provides the error taxonomy, environment variable names and
//! version parsing shared across all kubeversion crates.

pub mod env;
pub mod error;
pub mod version;

pub use env::EnvVars;
pub use error::{Error, ErrorCode, Fix, Result};
pub use version::{Version, VersionParseError};

/// Name of the kubeversion executable, used in guidance messages.
pub const PROGRAM_NAME: &str = "kubeversion";

/// Exit codes for the kubeversion CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    GeneralError = 1,
    /// Usage error (bad arguments)
    UsageError = 2,
    /// Configuration or local environment error
    ConfigError = 3,
    /// Remote endpoint unreachable or misbehaving
    RemoteError = 4,
    /// Requested version is not installed
    NotInstalled = 5,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
