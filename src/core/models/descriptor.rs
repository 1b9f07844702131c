//! Invocation descriptor model
//!
//! An inert description of the subprocess the host should run before
//! compiling a target. Building one never spawns anything.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A pre-build step handed to the host build system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationDescriptor {
    /// Human-readable name shown by the host while the step runs
    display_name: String,

    /// Executable to run
    executable: PathBuf,

    /// Ordered argument vector
    arguments: Vec<String>,

    /// Extra environment variables for the subprocess
    environment: BTreeMap<String, String>,

    /// Directory the host tracks as this step's outputs
    output_directory: PathBuf,
}

impl InvocationDescriptor {
    /// Create a new descriptor
    #[must_use]
    pub const fn new(
        display_name: String,
        executable: PathBuf,
        arguments: Vec<String>,
        environment: BTreeMap<String, String>,
        output_directory: PathBuf,
    ) -> Self {
        Self {
            display_name,
            executable,
            arguments,
            environment,
            output_directory,
        }
    }

    /// Display name of the step
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Path of the executable to run
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Argument vector, in order
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Environment overrides
    #[must_use]
    pub const fn environment(&self) -> &BTreeMap<String, String> {
        &self.environment
    }

    /// Declared output directory
    #[must_use]
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Render the command line for display (not for shell execution)
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.executable.display().to_string()];
        parts.extend(self.arguments.iter().cloned());
        parts.join(" ")
    }
}
