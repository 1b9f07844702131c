//! Executes pre-build steps
//!
//! Stands in for the host's command execution engine when the CLI runs
//! the linter itself. The child inherits the current environment plus the
//! descriptor's overrides, and its output streams.

use std::process::{Command, ExitStatus};

use anyhow::Context;

use crate::core::models::InvocationDescriptor;

/// Result of running one step
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    /// Exit status of the child process
    pub status: ExitStatus,
}

impl RunOutcome {
    /// Whether the step succeeded
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run a step to completion
pub fn run(descriptor: &InvocationDescriptor) -> anyhow::Result<RunOutcome> {
    log::info!("Running {}", descriptor.display_name());
    log::debug!("{}", descriptor.command_line());

    let status = Command::new(descriptor.executable())
        .args(descriptor.arguments())
        .envs(descriptor.environment())
        .status()
        .with_context(|| {
            format!(
                "failed to run {} ({})",
                descriptor.display_name(),
                descriptor.executable().display()
            )
        })?;

    Ok(RunOutcome { status })
}
