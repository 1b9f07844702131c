//! Adapter implementations for port traits
//!
//! - `package` - package module targets, sources found by walking a directory
//! - `project` - project targets, sources picked from typed input files
//! - `tool` - executable resolution through `PATH`

mod package;
mod project;
mod tool;

pub use package::PackageTarget;
pub use project::ProjectTarget;
pub use tool::PathToolResolver;
