//! Line sources for program text.
//!
//! The loader only needs "give me the lines of this path". Keeping that
//! behind [`SourceReader`] lets tests and embedders feed programs from memory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use weird_foundation::{Error, ErrorKind, Result};

/// Reads program text as lines.
pub trait SourceReader {
    /// Returns the lines of `path`, without line terminators.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the path cannot be read.
    fn read_lines(&self, path: &str) -> Result<Vec<String>>;
}

/// Reads sources from the filesystem.
///
/// Relative paths resolve against `root` when one is set, otherwise against
/// the process working directory.
#[derive(Debug, Default, Clone)]
pub struct FileSource {
    root: Option<PathBuf>,
}

impl FileSource {
    /// Creates a reader resolving paths against the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader resolving relative paths against `root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) if Path::new(path).is_relative() => root.join(path),
            _ => PathBuf::from(path),
        }
    }
}

impl SourceReader for FileSource {
    fn read_lines(&self, path: &str) -> Result<Vec<String>> {
        let text = fs::read_to_string(self.resolve(path)).map_err(|e| {
            Error::new(ErrorKind::Io {
                path: path.to_string(),
                message: e.to_string(),
            })
        })?;
        Ok(text.lines().map(str::to_owned).collect())
    }
}

/// In-memory sources keyed by path.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    /// Creates an empty source set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    /// Adds or replaces a file.
    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }
}

impl SourceReader for MemorySource {
    fn read_lines(&self, path: &str) -> Result<Vec<String>> {
        self.files
            .get(path)
            .map(|text| text.lines().map(str::to_owned).collect())
            .ok_or_else(|| {
                Error::new(ErrorKind::Io {
                    path: path.to_string(),
                    message: "no such file".to_string(),
                })
            })
    }
}
