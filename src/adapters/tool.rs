//! Tool resolution through `PATH`

use std::path::PathBuf;

use crate::core::ports::{ToolError, ToolResolver};

/// Resolves tools by an explicit override, else by searching `PATH`
#[derive(Debug, Clone, Default)]
pub struct PathToolResolver {
    override_path: Option<PathBuf>,
}

impl PathToolResolver {
    /// Create a resolver, optionally pinned to an explicit executable
    #[must_use]
    pub const fn new(override_path: Option<PathBuf>) -> Self {
        Self { override_path }
    }
}

impl ToolResolver for PathToolResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf, ToolError> {
        if let Some(path) = &self.override_path {
            if !path.exists() {
                log::warn!("Tool '{name}' configured path '{}' does not exist", path.display());
            }
            return Ok(path.clone());
        }

        match which::which(name) {
            Ok(path) => {
                log::debug!("Tool '{name}' detected at: {}", path.display());
                Ok(path)
            },
            Err(e) => {
                log::debug!("Tool '{name}' not found: {e}");
                Err(ToolError::NotFound(name.to_string()))
            },
        }
    }
}
