//! Realize a `PathSpec` on disk.
//!
//! For each entry, in order: create missing ancestors, write the literal
//! content (truncating whatever was there), print one progress line. The
//! first I/O error aborts the run; entries already written stay written.

use crate::manifest::{Entry, PathSpec};
use anyhow::Context;
use clap::ValueEnum;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What to do when a file entry's target already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExistingFiles {
    /// Replace the file with the declared content.
    #[default]
    Overwrite,
    /// Leave the file untouched and report it as skipped.
    Keep,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub files_written: usize,
    pub dirs_created: usize,
    pub skipped: usize,
}

/// Materialize every entry of `spec` under `base`, writing progress lines to `progress`.
pub fn materialize<W: Write>(
    base: &Path,
    spec: &PathSpec,
    existing: ExistingFiles,
    progress: &mut W,
) -> anyhow::Result<Outcome> {
    let mut outcome = Outcome::default();

    for entry in spec {
        let target = base.join(entry.path());
        let shown = display_path(base, entry.path());

        match entry {
            Entry::Dir { .. } => {
                fs::create_dir_all(&target)
                    .with_context(|| format!("create directory {}", target.display()))?;
                writeln!(progress, "  created: {}/", shown)?;
                outcome.dirs_created += 1;
            }
            Entry::File { content, .. } => {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("create parent directories for {}", target.display())
                    })?;
                }

                if existing == ExistingFiles::Keep && target.exists() {
                    writeln!(progress, "  skipped: {} (exists)", shown)?;
                    outcome.skipped += 1;
                    continue;
                }

                fs::write(&target, content.as_bytes())
                    .with_context(|| format!("write file {}", target.display()))?;
                writeln!(progress, "  created: {}", shown)?;
                outcome.files_written += 1;
            }
        }
    }

    Ok(outcome)
}

/// Path as printed in progress lines: relative to the working directory when
/// the base is the working directory itself.
fn display_path(base: &Path, rel: &Path) -> String {
    let joined: PathBuf = if base.as_os_str().is_empty() || base == Path::new(".") {
        rel.to_path_buf()
    } else {
        base.join(rel)
    };
    joined.display().to_string()
}
