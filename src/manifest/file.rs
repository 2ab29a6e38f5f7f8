//! JSON manifest (scaffold.json) describing a tree to materialize.
//!
//! JSON shape:
//! {
//!   "name": "react",                     // optional, defaults to the file stem
//!   "description": "...",                // optional
//!   "root": "frontend",                  // optional, defaults to "."
//!   "entries": [
//!     "public/favicon.ico",              // empty file
//!     "public/images/",                  // directory (trailing '/')
//!     { "path": "src/App.tsx", "content": "..." },
//!     { "dir": "src/assets" }
//!   ],
//!   "next_steps": ["npm install"]        // optional, printed after a run
//! }
//!
//! Paths are taken as authored; the table is trusted operator input.

use crate::manifest::entry::{Entry, Manifest, PathSpec};
use anyhow::{Context, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestFile {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub root: Option<String>,

    #[serde(default)]
    pub entries: Vec<RawEntry>,

    #[serde(default)]
    pub next_steps: Vec<String>,
}

/// Entry shapes accepted in the `entries` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    // "path/to/file" or "path/to/dir/"
    Bare(String),
    File(FileEntry),
    Dir(DirEntry),
}

/// `{ "path": "...", "content": "..." }`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileEntry {
    pub path: String,
    #[serde(default)]
    pub content: String,
}

/// `{ "dir": "..." }`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirEntry {
    pub dir: String,
}

impl RawEntry {
    fn build(&self) -> anyhow::Result<Entry> {
        match self {
            RawEntry::Bare(path) => {
                let trimmed = path.trim_end_matches('/');
                if trimmed.is_empty() {
                    bail!("entry path is empty: {:?}", path);
                }
                if trimmed.len() < path.len() {
                    Ok(Entry::dir(trimmed))
                } else {
                    Ok(Entry::file(path, ""))
                }
            }
            RawEntry::File(FileEntry { path, content }) => {
                if path.is_empty() {
                    bail!("file entry path is empty");
                }
                if path.ends_with('/') {
                    bail!("file entry path ends with '/': {}", path);
                }
                Ok(Entry::file(path, content.as_str()))
            }
            RawEntry::Dir(DirEntry { dir }) => {
                let trimmed = dir.trim_end_matches('/');
                if trimmed.is_empty() {
                    bail!("dir entry path is empty");
                }
                Ok(Entry::dir(trimmed))
            }
        }
    }
}

impl ManifestFile {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Turn raw entries into a `Manifest`, failing on the first malformed one.
    pub fn validate_and_build(&self, fallback_name: &str) -> anyhow::Result<Manifest> {
        let mut spec = PathSpec::new();
        for (idx, raw) in self.entries.iter().enumerate() {
            let entry = raw
                .build()
                .with_context(|| format!("bad entry #{} in manifest", idx + 1))?;
            spec.push(entry);
        }

        Ok(Manifest {
            name: self
                .name
                .clone()
                .unwrap_or_else(|| fallback_name.to_string()),
            description: self.description.clone(),
            root: PathBuf::from(self.root.as_deref().unwrap_or(".")),
            spec,
            next_steps: self.next_steps.clone(),
        })
    }
}

/// Read and validate a JSON manifest from disk.
pub fn load_json_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read manifest file {}", path.display()))?;
    let raw = ManifestFile::from_json(&text)
        .with_context(|| format!("parse manifest file {}", path.display()))?;
    raw.validate_and_build(&stem_of(path))
        .with_context(|| format!("invalid manifest {}", path.display()))
}

pub(crate) fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scaffold".to_string())
}
