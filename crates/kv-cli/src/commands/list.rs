//! `kubeversion list`.

use super::{Context, print_path_advice};
use crate::select::PromptSelector;
use kv_core::Result;
use kv_telemetry::TimingGuard;
use kv_toolchain::SelectOutcome;
use kv_ui::{Output, Style};

/// Fetch the catalog, prompt for a version and switch to it.
pub async fn run(ctx: &Context, output: &Output) -> Result<i32> {
    let _timer = TimingGuard::new("list");

    // Shown before the prompt so it is not lost behind the selection
    print_path_advice(ctx.manager.path_advice().as_ref(), output);

    let selector = PromptSelector::new(ctx.config.settings.list.page_size);
    match ctx.manager.interactive_select(&selector).await? {
        SelectOutcome::Cancelled => {
            output.info("No version selected");
        }
        SelectOutcome::Switched { installed, outcome } => {
            if let Some(installed) = installed {
                output.status(
                    "Installed",
                    &format!(
                        "kubectl {} ({})",
                        Style::version(&installed.version),
                        Style::megabytes(installed.bytes)
                    ),
                );
            }
            output.result(&format!(
                "Successfully switched to kubectl {}",
                outcome.activation.version
            ));
        }
    }
    Ok(0)
}

/// Print installed versions, newest first, marking the active one.
pub fn installed(ctx: &Context, output: &Output) -> Result<i32> {
    let versions = ctx.manager.installed()?;
    if versions.is_empty() {
        output.info("No kubectl versions installed");
        output.info("Run `kubeversion install <version>` to install one");
        return Ok(0);
    }

    let active = ctx.manager.current();
    for version in versions {
        if active.is_active(&version) {
            output.result(&format!("{} {}", version, Style::success("(active)")));
        } else {
            output.result(version.as_str());
        }
    }
    Ok(0)
}
