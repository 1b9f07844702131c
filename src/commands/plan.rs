//! Print the pre-build steps of a target

use std::path::Path;

use lintstep::linted_files;
use lintstep::output::{OutputMode, PlanResult};

use super::setup::prepare;
use crate::cli::TargetArgs;

/// Synthesize the steps for a target and print them
pub fn plan(args: &TargetArgs, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let prepared = prepare(args, config_path)?;
    let target = prepared.target.as_ref();

    let steps = prepared.plugin.create_build_commands(&prepared.context, target)?;
    let files = steps.iter().map(|step| linted_files(step).len()).sum();

    PlanResult {
        target: target.name().to_string(),
        files,
        steps,
    }
    .render(mode);
    Ok(())
}
