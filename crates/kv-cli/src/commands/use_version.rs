//! `kubeversion use <version>`.

use super::{Context, print_path_advice};
use kv_core::Result;
use kv_telemetry::TimingGuard;
use kv_ui::{Output, Style};

pub fn run(ctx: &Context, version: &str, output: &Output) -> Result<i32> {
    let _timer = TimingGuard::new("use");

    let outcome = ctx.manager.use_version(version)?;
    print_path_advice(outcome.path_advice.as_ref(), output);

    let activation = &outcome.activation;
    if activation.was_noop() {
        output.status(
            "Unchanged",
            &format!("kubectl {} is already active", Style::version(&activation.version)),
        );
    }
    output.result(&format!(
        "Successfully switched to kubectl {}",
        activation.version
    ));
    Ok(0)
}
