//! Terminal version picker.

use console::Term;
use dialoguer::FuzzySelect;
use dialoguer::theme::ColorfulTheme;
use kv_core::{Error, Result};
use kv_toolchain::{Candidate, Selection, VersionSelector};
use std::io;

/// Fuzzy-searchable list on stderr. Escape or Ctrl-C cancels.
pub struct PromptSelector {
    page_size: usize,
}

impl PromptSelector {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }
}

impl VersionSelector for PromptSelector {
    fn select(&self, candidates: &[Candidate]) -> Result<Selection> {
        if candidates.is_empty() {
            return Err(Error::Prompt {
                message: "no kubectl versions to choose from".to_string(),
                source: None,
            });
        }
        if !Term::stderr().is_term() {
            return Err(Error::Prompt {
                message: "interactive selection requires a terminal; use `kubeversion install <version>` or `kubeversion use <version>`".to_string(),
                source: None,
            });
        }

        let labels: Vec<String> = candidates.iter().map(Candidate::label).collect();
        let default = candidates.iter().position(|c| c.active).unwrap_or(0);

        let choice = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select kubectl version")
            .items(&labels)
            .default(default)
            .max_length(self.page_size)
            .interact_on_opt(&Term::stderr());

        match choice {
            Ok(Some(index)) => Ok(Selection::Chosen(candidates[index].version.clone())),
            Ok(None) => Ok(Selection::Cancelled),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                Ok(Selection::Cancelled)
            }
            Err(e) => Err(Error::Prompt {
                message: "version selection failed".to_string(),
                source: Some(Box::new(e)),
            }),
        }
    }
}
