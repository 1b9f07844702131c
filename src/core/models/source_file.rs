//! Source file models
//!
//! - [`SourceFileSet`] - the ordered files of one target that get linted
//! - [`InputFile`] - a typed input of a project target

use std::path::{Path, PathBuf};

/// Ordered set of source files belonging to one target
///
/// Order is exactly the order the files were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFileSet {
    files: Vec<PathBuf>,
}

impl SourceFileSet {
    /// Create a set from already-filtered paths
    #[must_use]
    pub const fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// Keep only the paths whose extension equals `suffix`, preserving order
    #[must_use]
    pub fn with_suffix<I, P>(paths: I, suffix: &str) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let files = paths
            .into_iter()
            .map(Into::into)
            .filter(|p| has_suffix(p, suffix))
            .collect();
        Self { files }
    }

    /// Whether the set has no files
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Iterate over the files in order
    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.files.iter()
    }
}

/// Whether `path` has exactly the extension `suffix` (case-sensitive)
fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.extension().is_some_and(|ext| ext == suffix)
}

/// Kind of a project input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Compiled source
    Source,
    /// Header
    Header,
    /// Resource bundled with the target
    Resource,
    /// Anything else
    Unknown,
}

/// A typed input file of a project target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Path of the file
    pub path: PathBuf,
    /// What the project considers this file to be
    pub kind: FileKind,
}

impl InputFile {
    /// Create a new input file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Classify a path by extension
    ///
    /// `source_suffix` marks sources, `h` marks headers, anything else with
    /// an extension is a resource.
    #[must_use]
    pub fn classify(path: impl Into<PathBuf>, source_suffix: &str) -> Self {
        let path = path.into();
        let kind = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext == source_suffix => FileKind::Source,
            Some("h") => FileKind::Header,
            Some(_) => FileKind::Resource,
            None => FileKind::Unknown,
        };
        Self::new(path, kind)
    }
}
