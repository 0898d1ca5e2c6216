//! `kubeversion install <version>`.

use super::{Context, print_path_advice};
use kv_core::Result;
use kv_telemetry::TimingGuard;
use kv_ui::{Output, Style};

pub async fn run(ctx: &Context, version: &str, activate: bool, output: &Output) -> Result<i32> {
    let _timer = TimingGuard::new("install");

    output.status("Installing", &format!("kubectl {}", Style::version(version)));
    let result = ctx.manager.install(version).await?;
    output.status(
        "Installed",
        &format!(
            "kubectl {} ({}) to {}",
            result.version,
            Style::megabytes(result.bytes),
            result.path.display()
        ),
    );

    if activate {
        let outcome = ctx.manager.use_version(result.version.as_str())?;
        print_path_advice(outcome.path_advice.as_ref(), output);
        output.result(&format!(
            "Successfully switched to kubectl {}",
            outcome.activation.version
        ));
    } else {
        output.result(&format!(
            "Successfully installed kubectl {}",
            result.version
        ));
    }
    Ok(0)
}
