//! `kubeversion current`.

use super::{Context, print_path_advice};
use kv_core::Result;
use kv_toolchain::ActiveState;
use kv_ui::Output;

pub fn run(ctx: &Context, output: &Output) -> Result<i32> {
    match ctx.manager.current() {
        ActiveState::ActiveVersion(version) => {
            output.result(version.as_str());
            print_path_advice(ctx.manager.path_advice().as_ref(), output);
        }
        ActiveState::NoActiveVersion => {
            output.info("No kubectl version is active");
            output.info("Run `kubeversion use <version>` or `kubeversion list` to pick one");
        }
    }
    Ok(0)
}
