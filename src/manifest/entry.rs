//! In-memory tree description consumed by the materializer.
//!
//! A `PathSpec` is an ordered list of entries. Order only affects the order
//! in which progress lines are printed; every entry creates its own parents.

use std::path::{Path, PathBuf};

/// One thing to put on disk, relative to the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A file written with literal content (may be empty).
    File { path: PathBuf, content: String },
    /// A directory that should exist even if no file lands in it.
    Dir { path: PathBuf },
}

impl Entry {
    pub fn file(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::File {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self::Dir { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        match self {
            Entry::File { path, .. } | Entry::Dir { path } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Dir { .. })
    }
}

/// Ordered (relative path, content) table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSpec {
    entries: Vec<Entry>,
}

impl PathSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_dir()).count()
    }
}

impl FromIterator<Entry> for PathSpec {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PathSpec {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A loaded tree description plus the metadata used for reporting.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub name: String,
    pub description: Option<String>,
    /// Base directory, relative to the working directory unless absolute.
    pub root: PathBuf,
    pub spec: PathSpec,
    pub next_steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_insertion_order_and_counts_files() {
        let spec: PathSpec = vec![
            Entry::dir("public/images"),
            Entry::file("package.json", "{}\n"),
            Entry::file("public/favicon.ico", ""),
        ]
        .into_iter()
        .collect();

        let paths: Vec<&Path> = spec.iter().map(Entry::path).collect();
        assert_eq!(
            paths,
            vec![
                Path::new("public/images"),
                Path::new("package.json"),
                Path::new("public/favicon.ico"),
            ]
        );
        assert_eq!(spec.len(), 3);
        assert_eq!(spec.file_count(), 2);
    }
}
