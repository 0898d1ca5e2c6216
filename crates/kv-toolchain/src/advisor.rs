//! PATH guidance for the managed bin directory.

use kv_config::Layout;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Shell instructions for putting the managed bin directory on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAdvice {
    pub bin_dir: PathBuf,
    pub lines: Vec<String>,
}

impl PathAdvice {
    fn for_bin_dir(bin_dir: &Path) -> Self {
        Self {
            bin_dir: bin_dir.to_path_buf(),
            lines: vec![
                "Add this to your shell config (~/.bashrc, ~/.zshrc, etc.):".to_string(),
                export_line(bin_dir),
                "Then restart your shell or source the config file.".to_string(),
            ],
        }
    }
}

#[cfg(windows)]
fn export_line(bin_dir: &Path) -> String {
    format!("$env:Path = \"{};$env:Path\"", bin_dir.display())
}

#[cfg(not(windows))]
fn export_line(bin_dir: &Path) -> String {
    format!("export PATH=\"{}:$PATH\"", bin_dir.display())
}

/// Whether `bin_dir` appears verbatim as an entry of `search_path`.
///
/// Entries are compared as written. `/home/me/.kubeversion/bin/` does not
/// match `/home/me/.kubeversion/bin`.
pub fn is_on_search_path(bin_dir: &Path, search_path: Option<&OsStr>) -> bool {
    let Some(search_path) = search_path else {
        return false;
    };
    std::env::split_paths(search_path).any(|entry| entry.as_os_str() == bin_dir.as_os_str())
}

/// Advice to print when the managed bin directory is not on `search_path`.
pub fn advise(layout: &Layout, search_path: Option<&OsStr>) -> Option<PathAdvice> {
    let bin_dir = layout.bin_dir();
    if is_on_search_path(&bin_dir, search_path) {
        None
    } else {
        Some(PathAdvice::for_bin_dir(&bin_dir))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn layout() -> Layout {
        Layout::new("/home/me/.kubeversion")
    }

    #[test]
    fn test_exact_entry_matches() {
        let path = OsString::from("/usr/bin:/home/me/.kubeversion/bin:/bin");
        assert!(is_on_search_path(
            Path::new("/home/me/.kubeversion/bin"),
            Some(&path)
        ));
        assert_eq!(advise(&layout(), Some(&path)), None);
    }

    #[test]
    fn test_trailing_slash_is_not_a_match() {
        let path = OsString::from("/usr/bin:/home/me/.kubeversion/bin/");
        assert!(!is_on_search_path(
            Path::new("/home/me/.kubeversion/bin"),
            Some(&path)
        ));
    }

    #[test]
    fn test_missing_search_path() {
        assert!(!is_on_search_path(Path::new("/home/me/.kubeversion/bin"), None));

        let advice = advise(&layout(), None).unwrap();
        assert_eq!(advice.bin_dir, PathBuf::from("/home/me/.kubeversion/bin"));
        assert!(
            advice
                .lines
                .contains(&"export PATH=\"/home/me/.kubeversion/bin:$PATH\"".to_string())
        );
    }

    #[test]
    fn test_empty_entries_are_ignored() {
        let path = OsString::from("::/usr/bin");
        assert!(!is_on_search_path(Path::new("/usr/local/bin"), Some(&path)));
    }
}
