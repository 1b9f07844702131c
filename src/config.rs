//! Tool configuration
//!
//! The linter's logical name, display name, source suffix and workspace
//! environment key are configuration rather than hardcoded identifiers.
//! Defaults describe SwiftLint; a project may override any of them in
//! `.lintstep.toml`:
//!
//! ```toml
//! tool_name = "swiftlint"
//! display_name = "SwiftLint"
//! source_suffix = "swift"
//! workspace_env_key = "BUILD_WORKSPACE_DIRECTORY"
//! # tool_path = "/opt/homebrew/bin/swiftlint"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub use crate::core::services::synthesizer::DEFAULT_DISPLAY_NAME;
use crate::paths;

/// Logical name the linter executable is resolved by
pub const DEFAULT_TOOL_NAME: &str = "swiftlint";

/// Extension of the files handed to the linter
pub const DEFAULT_SOURCE_SUFFIX: &str = "swift";

/// Variable telling the linter where the project root is
pub const DEFAULT_WORKSPACE_ENV_KEY: &str = "BUILD_WORKSPACE_DIRECTORY";

/// Configuration of the external linter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Logical tool name
    pub tool_name: String,
    /// Display name of the pre-build step
    pub display_name: String,
    /// Source file extension, without the dot
    pub source_suffix: String,
    /// Environment variable carrying the project root
    pub workspace_env_key: String,
    /// Explicit executable, bypassing resolution by name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_path: Option<PathBuf>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            workspace_env_key: DEFAULT_WORKSPACE_ENV_KEY.to_string(),
            tool_path: None,
        }
    }
}

impl ToolConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid tool configuration")
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load `.lintstep.toml` from the project, or defaults when it is absent
    pub fn load_for_project(project_directory: &Path) -> anyhow::Result<Self> {
        let path = paths::project_config(project_directory);
        if path.exists() {
            log::debug!("Loading configuration from {}", path.display());
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }
}
