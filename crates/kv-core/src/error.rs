//! Error types for kubeversion.

use crate::{ExitCode, PROGRAM_NAME};
use std::path::{Path, PathBuf};

/// Result type alias using kubeversion Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as the cause of transport and decode failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error codes for categorizing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Home directory could not be resolved
    HomeDirectoryUnavailable,
    /// A managed directory could not be created
    DirectoryCreateFailed,
    /// Transport failure while talking to a remote endpoint
    NetworkFailure,
    /// Remote endpoint answered with a non-200 status
    RemoteNonSuccessStatus,
    /// Remote response body did not have the expected shape
    ResponseDecodeFailure,
    /// Downloaded artifact could not be written
    ArtifactWriteFailure,
    /// Requested version has no artifact in the version store
    VersionNotInstalled,
    /// Stable binary symlink could not be created
    SymlinkCreateFailure,
    /// Invalid configuration
    ConfigError,
    /// I/O error
    IoError,
    /// Interactive prompt failed
    PromptFailed,
}

/// A fix suggestion for an error.
#[derive(Debug, Clone)]
pub struct Fix {
    /// Description of what this fix does
    pub description: String,
    /// Command to run, if applicable
    pub command: Option<String>,
}

impl Fix {
    /// Create a fix with just a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    /// Create a fix with a command.
    pub fn with_command(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: Some(command.into()),
        }
    }
}

/// Structured error type for kubeversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to get home directory")]
    HomeDirectoryUnavailable { fixes: Vec<Fix> },

    #[error("failed to create {what} directory")]
    DirectoryCreate {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to {action}")]
    Network {
        action: String,
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to {action}: HTTP {status}")]
    RemoteStatus {
        action: String,
        url: String,
        status: u16,
        fixes: Vec<Fix>,
    },

    #[error("failed to decode {what}")]
    Decode {
        what: String,
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to save kubectl")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "version {version} is not installed. Use '{program} install {version}' first",
        program = PROGRAM_NAME
    )]
    VersionNotInstalled { version: String, fixes: Vec<Fix> },

    #[error("failed to create symlink")]
    SymlinkCreate {
        link: PathBuf,
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxError>,
        fixes: Vec<Fix>,
    },

    #[error("I/O error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("prompt failed: {message}")]
    Prompt {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl Error {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::HomeDirectoryUnavailable { .. } => ErrorCode::HomeDirectoryUnavailable,
            Error::DirectoryCreate { .. } => ErrorCode::DirectoryCreateFailed,
            Error::Network { .. } => ErrorCode::NetworkFailure,
            Error::RemoteStatus { .. } => ErrorCode::RemoteNonSuccessStatus,
            Error::Decode { .. } => ErrorCode::ResponseDecodeFailure,
            Error::ArtifactWrite { .. } => ErrorCode::ArtifactWriteFailure,
            Error::VersionNotInstalled { .. } => ErrorCode::VersionNotInstalled,
            Error::SymlinkCreate { .. } => ErrorCode::SymlinkCreateFailure,
            Error::Config { .. } => ErrorCode::ConfigError,
            Error::Io { .. } => ErrorCode::IoError,
            Error::Prompt { .. } => ErrorCode::PromptFailed,
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self.code() {
            ErrorCode::NetworkFailure
            | ErrorCode::RemoteNonSuccessStatus
            | ErrorCode::ResponseDecodeFailure => ExitCode::RemoteError,
            ErrorCode::VersionNotInstalled => ExitCode::NotInstalled,
            ErrorCode::HomeDirectoryUnavailable | ErrorCode::ConfigError => ExitCode::ConfigError,
            _ => ExitCode::GeneralError,
        }
    }

    /// Get suggested fixes for this error.
    pub fn fixes(&self) -> &[Fix] {
        match self {
            Error::HomeDirectoryUnavailable { fixes } => fixes,
            Error::RemoteStatus { fixes, .. } => fixes,
            Error::VersionNotInstalled { fixes, .. } => fixes,
            Error::Config { fixes, .. } => fixes,
            _ => &[],
        }
    }

    /// The filesystem path this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::DirectoryCreate { path, .. } | Error::ArtifactWrite { path, .. } => Some(path),
            Error::SymlinkCreate { link, .. } => Some(link),
            Error::Config { path, .. } | Error::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }

    /// The remote URL this error refers to, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Network { url, .. } | Error::RemoteStatus { url, .. } | Error::Decode { url, .. } => {
                Some(url)
            }
            _ => None,
        }
    }

    /// Create a home directory error.
    pub fn home_unavailable() -> Self {
        Error::HomeDirectoryUnavailable {
            fixes: vec![Fix::new(
                "Set KUBEVERSION_HOME to the directory kubeversion should manage",
            )],
        }
    }

    /// Create a directory creation error.
    pub fn directory_create(
        what: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Error::DirectoryCreate {
            what,
            path: path.into(),
            source,
        }
    }

    /// Create a transport error for the given stage.
    pub fn network(
        action: impl Into<String>,
        url: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Error::Network {
            action: action.into(),
            url: url.into(),
            source: source.into(),
        }
    }

    /// Create a non-success status error for the given stage.
    pub fn remote_status(action: impl Into<String>, url: impl Into<String>, status: u16) -> Self {
        let fixes = if status == 404 {
            vec![Fix::new(
                "Check that the version exists and is published for your platform",
            )]
        } else {
            vec![]
        };
        Error::RemoteStatus {
            action: action.into(),
            url: url.into(),
            status,
            fixes,
        }
    }

    /// Create a response decode error.
    pub fn decode(what: impl Into<String>, url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::Decode {
            what: what.into(),
            url: url.into(),
            source: source.into(),
        }
    }

    /// Create a "not installed" error carrying the remedial command.
    pub fn not_installed(version: impl Into<String>) -> Self {
        let version = version.into();
        let command = format!("{PROGRAM_NAME} install {version}");
        Error::VersionNotInstalled {
            fixes: vec![Fix::with_command(
                format!("Install kubectl {version} first"),
                command,
            )],
            version,
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            path: None,
            source: None,
            fixes: vec![],
        }
    }

    /// Create an I/O error with a path.
    pub fn io(message: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            message: message.into(),
            path: Some(path.into()),
            source,
        }
    }
}
