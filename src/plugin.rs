//! Build tool plugin entry point
//!
//! Ties a host target to the synthesizer: resolve the linter, list the
//! target's sources, point the linter at the project root and produce the
//! pre-build step.

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ToolConfig;
use crate::core::models::InvocationDescriptor;
use crate::core::ports::{DiscoveryError, SourceEnumerator, ToolError, ToolResolver};
use crate::core::services::{SynthesisError, Synthesizer};

/// Errors raised while creating build commands
#[derive(Debug, Error)]
pub enum PluginError {
    /// The target's sources could not be listed
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// The linter executable could not be resolved
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// The pre-build step could not be synthesized
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// What the host knows about the current plugin invocation
#[derive(Debug, Clone)]
pub struct PluginContext {
    /// Logical project root, exported to the linter
    pub project_directory: PathBuf,
    /// Scratch directory owned by this invocation
    pub work_directory: PathBuf,
    /// Linter configuration
    pub config: ToolConfig,
}

impl PluginContext {
    /// Create a context with the default linter configuration
    #[must_use]
    pub fn new(project_directory: impl Into<PathBuf>, work_directory: impl Into<PathBuf>) -> Self {
        Self {
            project_directory: project_directory.into(),
            work_directory: work_directory.into(),
            config: ToolConfig::default(),
        }
    }

    /// Replace the linter configuration
    #[must_use]
    pub fn with_config(mut self, config: ToolConfig) -> Self {
        self.config = config;
        self
    }

    /// Environment overrides for the linter subprocess
    #[must_use]
    pub fn environment(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(
            self.config.workspace_env_key.clone(),
            self.project_directory.to_string_lossy().into_owned(),
        )])
    }
}

/// The lint build tool plugin
#[derive(Debug)]
pub struct BuildToolPlugin<R> {
    resolver: R,
}

impl<R: ToolResolver> BuildToolPlugin<R> {
    /// Create a plugin resolving the linter through `resolver`
    #[must_use]
    pub const fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Produce the pre-build steps for `target`
    ///
    /// The linter is resolved before anything else, so a missing linter
    /// fails every target. A target without sources then yields no steps.
    pub fn create_build_commands<T>(
        &self,
        context: &PluginContext,
        target: &T,
    ) -> Result<Vec<InvocationDescriptor>, PluginError>
    where
        T: SourceEnumerator + ?Sized,
    {
        let executable = self.resolver.resolve(&context.config.tool_name)?;

        let sources = target.source_files(&context.config.source_suffix)?;
        if sources.is_empty() {
            log::debug!("Target '{}' has nothing to lint", target.name());
            return Ok(Vec::new());
        }

        let synthesizer = Synthesizer::new(context.config.display_name.as_str());
        let commands = synthesizer.synthesize(
            &executable,
            &sources,
            &context.environment(),
            &context.work_directory,
        )?;
        Ok(commands)
    }
}
