//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::InvocationDescriptor;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of planning the pre-build steps of a target
#[derive(Debug, Serialize)]
pub struct PlanResult {
    /// Target name
    pub target: String,
    /// Number of source files handed to the linter
    pub files: usize,
    /// Steps the host should run
    pub steps: Vec<InvocationDescriptor>,
}

/// Result of running the pre-build steps of a target
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Target name
    pub target: String,
    /// Whether every step succeeded
    pub passed: bool,
    /// Per-step outcomes
    pub steps: Vec<StepOutcome>,
}

/// Outcome of one executed step
#[derive(Debug, Serialize)]
pub struct StepOutcome {
    /// Display name of the step
    pub display_name: String,
    /// Whether the step exited successfully
    pub success: bool,
    /// Exit code, when the process exited normally
    pub exit_code: Option<i32>,
}

impl PlanResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.steps.is_empty() {
            println!("Target '{}': nothing to lint.", self.target);
            return;
        }

        println!("Target '{}': {} source file(s)\n", self.target, self.files);
        for step in &self.steps {
            println!("  {}", step.display_name().bold());
            println!("    {}", step.command_line());
            for (key, value) in step.environment() {
                println!("    env {key}={value}");
            }
            println!("    output {}", step.output_directory().display());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl RunResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.steps.is_empty() {
            println!("Target '{}': nothing to lint.", self.target);
            return;
        }

        for step in &self.steps {
            let status = if step.success { "ok".green() } else { "failed".red() };
            match step.exit_code {
                Some(code) if !step.success => {
                    println!("{}: {status} (exit {code})", step.display_name);
                },
                _ => println!("{}: {status}", step.display_name),
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
