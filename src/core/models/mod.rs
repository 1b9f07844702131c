//! Domain models for lintstep
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`InvocationDescriptor`] - "run this before compiling"
//! - [`SourceFileSet`] - the files of one target handed to the linter
//! - [`InputFile`] - a typed input of a project target

mod descriptor;
mod source_file;

pub use descriptor::InvocationDescriptor;
pub use source_file::{FileKind, InputFile, SourceFileSet};
