//! Synthesize and execute the pre-build steps of a target

use std::path::Path;

use lintstep::output::{OutputMode, RunResult, StepOutcome};
use lintstep::runner;

use super::setup::prepare;
use crate::cli::TargetArgs;

/// Run every step of a target, failing if any step fails
pub fn run(args: &TargetArgs, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let prepared = prepare(args, config_path)?;
    let target = prepared.target.as_ref();

    let steps = prepared.plugin.create_build_commands(&prepared.context, target)?;

    let mut outcomes = Vec::with_capacity(steps.len());
    for step in &steps {
        let outcome = runner::run(step)?;
        outcomes.push(StepOutcome {
            display_name: step.display_name().to_string(),
            success: outcome.success(),
            exit_code: outcome.status.code(),
        });
    }

    let failed = outcomes.iter().filter(|o| !o.success).count();
    let result = RunResult {
        target: target.name().to_string(),
        passed: failed == 0,
        steps: outcomes,
    };
    result.render(mode);

    if failed > 0 {
        anyhow::bail!("{failed} pre-build step(s) failed");
    }
    Ok(())
}
