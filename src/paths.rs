//! Centralized path definitions for lintstep
//!
//! ## Work Directory Layout
//!
//! ```text
//! <work>/                     # Allocated by the host to one plugin invocation
//! ├── Cache/                  # Linter's incremental cache (--cache-path)
//! └── Output/                 # Declared output directory of the pre-build step
//! ```
//!
//! The synthesizer owns these names (`CACHE_DIR`, `OUTPUT_DIR` in
//! `core::services::synthesizer`). Both directories persist across builds.
//! The linter usually writes nothing to `Output/`; it exists so the host can
//! track the step.
//!
//! ## Project Layout
//!
//! ```text
//! project/
//! └── .lintstep.toml          # Optional tool configuration
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const LINTSTEP_TOML: &str = ".lintstep.toml";

/// Project configuration file
#[must_use]
pub fn project_config(project_directory: &Path) -> PathBuf {
    project_directory.join(LINTSTEP_TOML)
}
