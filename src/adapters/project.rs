//! Project targets
//!
//! A target of an IDE project lists its inputs explicitly, each with a
//! kind. Only inputs of kind `Source` with the requested extension are
//! linted; their order is kept. Relative input paths are resolved against
//! the current directory.

use std::path;

use crate::core::models::{FileKind, InputFile, SourceFileSet};
use crate::core::ports::{DiscoveryError, SourceEnumerator};

/// A project target described by its typed input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    name: String,
    inputs: Vec<InputFile>,
}

impl ProjectTarget {
    /// Create a target from its inputs
    #[must_use]
    pub fn new(name: impl Into<String>, inputs: Vec<InputFile>) -> Self {
        Self {
            name: name.into(),
            inputs,
        }
    }
}

impl SourceEnumerator for ProjectTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_files(&self, suffix: &str) -> Result<SourceFileSet, DiscoveryError> {
        let files = self
            .inputs
            .iter()
            .filter(|input| input.kind == FileKind::Source)
            .map(|input| {
                path::absolute(&input.path).map_err(|source| DiscoveryError::Resolve {
                    path: input.path.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let sources = SourceFileSet::with_suffix(files, suffix);

        log::debug!(
            "Target '{}': {} of {} input(s) are .{suffix} sources",
            self.name,
            sources.len(),
            self.inputs.len()
        );
        Ok(sources)
    }
}
