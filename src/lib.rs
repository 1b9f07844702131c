//! lintstep - Run an external linter as a pre-build step
//!
//! This library discovers the source files of a build target, resolves the
//! linter executable and synthesizes the pre-build step (executable,
//! arguments, environment, output directory) the host build system runs
//! before compiling the target.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod plugin;
pub mod runner;

pub use crate::core::models::{InvocationDescriptor, SourceFileSet};
pub use crate::core::services::{SynthesisError, Synthesizer, linted_files, synthesize};
pub use plugin::{BuildToolPlugin, PluginContext, PluginError};
