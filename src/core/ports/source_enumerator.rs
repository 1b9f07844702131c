//! Source enumeration port
//!
//! Defines how a host target exposes the files that should be linted.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::SourceFileSet;

/// Errors raised while enumerating a target's sources
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Walking the target directory failed
    #[error("failed to read sources under {}: {message}", .root.display())]
    Walk {
        /// Root of the walk
        root: PathBuf,
        /// Description of the failure
        message: String,
    },

    /// A path could not be made absolute
    #[error("failed to resolve {}: {source}", .path.display())]
    Resolve {
        /// Path as given by the host
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },
}

/// A build target that can list its source files
pub trait SourceEnumerator {
    /// Name of the target
    fn name(&self) -> &str;

    /// Source files with the given extension, in host order
    ///
    /// Paths are absolute.
    fn source_files(&self, suffix: &str) -> Result<SourceFileSet, DiscoveryError>;
}
