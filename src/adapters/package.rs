//! Package targets
//!
//! A module target of a package: its sources are every file under the
//! target directory with the requested extension. Targets that are not
//! source modules (binary or aggregate targets) have no sources at all.

use std::path::{self, PathBuf};

use walkdir::WalkDir;

use crate::core::models::SourceFileSet;
use crate::core::ports::{DiscoveryError, SourceEnumerator};

/// A package target, optionally rooted at a source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageTarget {
    name: String,
    directory: Option<PathBuf>,
}

impl PackageTarget {
    /// A source module target rooted at `directory`
    #[must_use]
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: Some(directory.into()),
        }
    }

    /// A target that carries no source files
    #[must_use]
    pub fn without_sources(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: None,
        }
    }
}

impl SourceEnumerator for PackageTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_files(&self, suffix: &str) -> Result<SourceFileSet, DiscoveryError> {
        let Some(directory) = &self.directory else {
            log::debug!("Target '{}' is not a source module", self.name);
            return Ok(SourceFileSet::default());
        };

        let root = path::absolute(directory).map_err(|source| DiscoveryError::Resolve {
            path: directory.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.map_err(|e| DiscoveryError::Walk {
                root: root.clone(),
                message: e.to_string(),
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        let sources = SourceFileSet::with_suffix(files, suffix);
        log::debug!("Target '{}': {} .{suffix} file(s)", self.name, sources.len());
        Ok(sources)
    }
}
