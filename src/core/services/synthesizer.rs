//! Command synthesizer - turns a target's sources into a pre-build step
//!
//! Given the linter executable, the target's source files, the environment
//! overrides and the plugin work directory, this produces at most one
//! [`InvocationDescriptor`]. The only side effect is creating the `Cache`
//! and `Output` directories under the work directory.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::{InvocationDescriptor, SourceFileSet};

/// Display name used when none is configured
pub const DEFAULT_DISPLAY_NAME: &str = "SwiftLint";

/// Cache subdirectory of the work directory
pub const CACHE_DIR: &str = "Cache";

/// Output subdirectory of the work directory
pub const OUTPUT_DIR: &str = "Output";

/// Leading subcommand passed to the linter
pub const LINT_SUBCOMMAND: &str = "lint";

/// Suppresses the linter's non-violation output
pub const QUIET_FLAG: &str = "--quiet";

/// Makes the linter apply its exclusion rules to explicitly passed files
pub const FORCE_EXCLUDE_FLAG: &str = "--force-exclude";

/// Precedes the cache directory argument
pub const CACHE_PATH_FLAG: &str = "--cache-path";

/// Arguments preceding the source files: four flags and the cache path
pub const LEADING_ARGUMENTS: usize = 5;

/// Errors raised while synthesizing a pre-build step
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// A scratch directory could not be created
    #[error("failed to create scratch directory {}: {source}", .path.display())]
    ScratchDirectory {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },
}

/// Synthesizes pre-build steps under one display name
#[derive(Debug, Clone)]
pub struct Synthesizer {
    display_name: String,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_NAME)
    }
}

impl Synthesizer {
    /// Create a synthesizer whose steps carry `display_name`
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }

    /// Build the pre-build step for `source_files`
    ///
    /// Returns an empty vector, creating nothing, when there are no source
    /// files. Otherwise creates `<work>/Cache` and `<work>/Output` (which may
    /// already exist) and returns exactly one descriptor.
    pub fn synthesize(
        &self,
        executable: &Path,
        source_files: &SourceFileSet,
        environment: &BTreeMap<String, String>,
        work_directory: &Path,
    ) -> Result<Vec<InvocationDescriptor>, SynthesisError> {
        if source_files.is_empty() {
            log::debug!("No source files, skipping {}", self.display_name);
            return Ok(Vec::new());
        }

        let cache_dir = work_directory.join(CACHE_DIR);
        let output_dir = work_directory.join(OUTPUT_DIR);

        ensure_dir(&cache_dir)?;
        ensure_dir(&output_dir)?;

        let descriptor = InvocationDescriptor::new(
            self.display_name.clone(),
            executable.to_path_buf(),
            build_arguments(&cache_dir, source_files),
            environment.clone(),
            output_dir,
        );

        log::info!(
            "{}: {} file(s) queued for linting",
            descriptor.display_name(),
            source_files.len()
        );

        Ok(vec![descriptor])
    }
}

/// Build the pre-build step under the default display name
///
/// See [`Synthesizer::synthesize`].
pub fn synthesize(
    executable: &Path,
    source_files: &SourceFileSet,
    environment: &BTreeMap<String, String>,
    work_directory: &Path,
) -> Result<Vec<InvocationDescriptor>, SynthesisError> {
    Synthesizer::default().synthesize(executable, source_files, environment, work_directory)
}

/// Source file arguments of a descriptor built by this module
#[must_use]
pub fn linted_files(descriptor: &InvocationDescriptor) -> &[String] {
    descriptor.arguments().get(LEADING_ARGUMENTS..).unwrap_or_default()
}

/// Argument vector: fixed flags, the cache path, then every source in order
fn build_arguments(cache_dir: &Path, source_files: &SourceFileSet) -> Vec<String> {
    let mut arguments = Vec::with_capacity(LEADING_ARGUMENTS + source_files.len());
    arguments.push(LINT_SUBCOMMAND.to_string());
    arguments.push(QUIET_FLAG.to_string());
    // All of the target's sources are passed, so the linter has to apply
    // its own exclusion rules to them.
    arguments.push(FORCE_EXCLUDE_FLAG.to_string());
    arguments.push(CACHE_PATH_FLAG.to_string());
    arguments.push(cache_dir.to_string_lossy().into_owned());
    arguments.extend(source_files.iter().map(|p| p.to_string_lossy().into_owned()));
    arguments
}

/// Create `path` and its parents; an existing directory is success
fn ensure_dir(path: &Path) -> Result<(), SynthesisError> {
    fs::create_dir_all(path).map_err(|source| SynthesisError::ScratchDirectory {
        path: path.to_path_buf(),
        source,
    })
}
