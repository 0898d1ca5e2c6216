//! Environment variable names recognized by kubeversion.

/// Environment variable names used by kubeversion.
pub struct EnvVars;

impl EnvVars {
    // ─── Global Settings ─────────────────────────────────────────────────────

    /// Root directory for kubeversion state (defaults to `~/.kubeversion`).
    pub const KUBEVERSION_HOME: &'static str = "KUBEVERSION_HOME";

    /// Path to the kubeversion configuration file.
    pub const KUBEVERSION_CONFIG_FILE: &'static str = "KUBEVERSION_CONFIG_FILE";

    /// Enable verbose output.
    pub const KUBEVERSION_VERBOSE: &'static str = "KUBEVERSION_VERBOSE";

    /// Suppress output.
    pub const KUBEVERSION_QUIET: &'static str = "KUBEVERSION_QUIET";

    /// Disable colored output.
    pub const KUBEVERSION_NO_COLOR: &'static str = "KUBEVERSION_NO_COLOR";

    /// Enable JSON log output.
    pub const KUBEVERSION_LOG_JSON: &'static str = "KUBEVERSION_LOG_JSON";

    // ─── Remote Settings ─────────────────────────────────────────────────────

    /// Override the release catalog URL.
    pub const KUBEVERSION_RELEASES_URL: &'static str = "KUBEVERSION_RELEASES_URL";

    /// Override the kubectl download base URL.
    pub const KUBEVERSION_DOWNLOAD_URL: &'static str = "KUBEVERSION_DOWNLOAD_URL";

    // ─── Standard Environment Variables ──────────────────────────────────────

    /// Executable search path.
    pub const PATH: &'static str = "PATH";

    /// Standard NO_COLOR environment variable.
    pub const NO_COLOR: &'static str = "NO_COLOR";

    /// Standard CLICOLOR environment variable.
    pub const CLICOLOR: &'static str = "CLICOLOR";
}

/// Check if colors should be disabled based on environment.
pub fn no_color() -> bool {
    std::env::var(EnvVars::NO_COLOR).is_ok()
        || std::env::var(EnvVars::KUBEVERSION_NO_COLOR).is_ok()
        || std::env::var(EnvVars::CLICOLOR)
            .map(|v| v == "0")
            .unwrap_or(false)
}
