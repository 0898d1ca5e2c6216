//! Platform detection for kubectl downloads.

use crate::version::VersionTag;
use std::fmt;

/// Operating systems kubectl is published for, in Kubernetes naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Linux,
    Darwin,
    Windows,
}

impl Os {
    /// Map a Rust `target_os` value.
    pub fn from_rust(os: &str) -> Option<Self> {
        match os {
            "linux" => Some(Self::Linux),
            "macos" => Some(Self::Darwin),
            "windows" => Some(Self::Windows),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
        }
    }
}

/// CPU architectures kubectl is published for, in Kubernetes naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Amd64,
    Arm64,
    Arm,
    I386,
    Ppc64le,
    S390x,
}

impl Arch {
    /// Map a Rust `target_arch` value.
    pub fn from_rust(arch: &str) -> Option<Self> {
        match arch {
            "x86_64" => Some(Self::Amd64),
            "aarch64" => Some(Self::Arm64),
            "arm" => Some(Self::Arm),
            "x86" => Some(Self::I386),
            // Only the little-endian variant is published
            "powerpc64" if cfg!(target_endian = "little") => Some(Self::Ppc64le),
            "s390x" => Some(Self::S390x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
            Self::Arm => "arm",
            Self::I386 => "386",
            Self::Ppc64le => "ppc64le",
            Self::S390x => "s390x",
        }
    }
}

/// Target platform for a kubectl download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Detect the platform this process runs on.
    pub fn current() -> Option<Self> {
        Self::from_rust(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Map Rust `target_os`/`target_arch` values.
    pub fn from_rust(os: &str, arch: &str) -> Option<Self> {
        Some(Self::new(Os::from_rust(os)?, Arch::from_rust(arch)?))
    }

    /// Name of the binary in the download URL.
    pub fn binary_name(&self) -> &'static str {
        match self.os {
            Os::Windows => "kubectl.exe",
            _ => "kubectl",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os.as_str(), self.arch.as_str())
    }
}

/// Construct the kubectl download URL for a version and platform.
///
/// `https://dl.k8s.io/release/{version}/bin/{os}/{arch}/kubectl`
pub fn kubectl_download_url(base: &str, version: &VersionTag, platform: Platform) -> String {
    format!(
        "{base}/{version}/bin/{os}/{arch}/{binary}",
        base = base.trim_end_matches('/'),
        version = version,
        os = platform.os.as_str(),
        arch = platform.arch.as_str(),
        binary = platform.binary_name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detection() {
        let platform = Platform::current();
        if cfg!(all(
            any(target_os = "linux", target_os = "macos"),
            any(target_arch = "x86_64", target_arch = "aarch64")
        )) {
            assert!(platform.is_some());
        }
    }

    #[test]
    fn test_rust_names_map_to_kubernetes_names() {
        assert_eq!(
            Platform::from_rust("macos", "aarch64"),
            Some(Platform::new(Os::Darwin, Arch::Arm64))
        );
        assert_eq!(
            Platform::from_rust("linux", "x86_64"),
            Some(Platform::new(Os::Linux, Arch::Amd64))
        );
        assert_eq!(Platform::from_rust("freebsd", "x86_64"), None);
        assert_eq!(Platform::from_rust("linux", "riscv64"), None);
    }

    #[test]
    fn test_kubectl_download_url() {
        let version = VersionTag::normalize("1.29.0");
        let url = kubectl_download_url(
            "https://dl.k8s.io/release",
            &version,
            Platform::new(Os::Linux, Arch::Amd64),
        );
        assert_eq!(url, "https://dl.k8s.io/release/v1.29.0/bin/linux/amd64/kubectl");

        let url = kubectl_download_url(
            "https://mirror.example.com/",
            &version,
            Platform::new(Os::Windows, Arch::Amd64),
        );
        assert_eq!(
            url,
            "https://mirror.example.com/v1.29.0/bin/windows/amd64/kubectl.exe"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Platform::new(Os::Darwin, Arch::Arm64).to_string(), "darwin/arm64");
    }
}
