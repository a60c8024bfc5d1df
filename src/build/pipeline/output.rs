//! Files produced by pipeline stages.

use std::path::PathBuf;

/// What an output file is, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// A top-level site page
    Page,
    /// One page (or Jekyll source) per post
    Post,
    /// Site-wide settings such as `_config.yml`
    Config,
    /// Layouts, includes and other files Jekyll assembles pages from
    Scaffold,
}

/// A rendered file waiting to be written.
///
/// Stages append these; the write stage puts them on disk.
#[derive(Debug, Clone)]
pub struct OutputFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    pub kind: OutputKind,
    pub contents: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, kind: OutputKind, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            contents: contents.into(),
        }
    }
}
