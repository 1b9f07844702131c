//! Tool resolution port
//!
//! The synthesizer never searches for executables; the host resolves the
//! logical tool name through this interface.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving a tool
#[derive(Debug, Error)]
pub enum ToolError {
    /// No executable could be found for the tool
    #[error("Required tool '{0}' not found. Please install it and ensure it's in your PATH.")]
    NotFound(String),
}

/// Resolves a logical tool name to an executable path
pub trait ToolResolver {
    /// Resolve `name` to an executable
    fn resolve(&self, name: &str) -> Result<PathBuf, ToolError>;
}
