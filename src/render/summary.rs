use crate::manifest::{Entry, Manifest};
use crate::materialize::Outcome;
use std::fmt::Write;
use std::path::Path;

/// Completion message printed after a successful run.
pub fn render_summary(manifest: &Manifest, base: &Path, outcome: &Outcome) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "\nDone. Created {} file(s) and {} director{} under {}",
        outcome.files_written,
        outcome.dirs_created,
        if outcome.dirs_created == 1 { "y" } else { "ies" },
        base.display()
    );
    if outcome.skipped > 0 {
        let _ = write!(out, " ({} existing file(s) kept)", outcome.skipped);
    }
    out.push('\n');

    if !manifest.next_steps.is_empty() {
        out.push_str("\nNext steps:\n");
        for (i, step) in manifest.next_steps.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, step);
        }
    }
    out
}

/// Dry listing of what a manifest would create.
pub fn render_listing(manifest: &Manifest) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (root: {}, {} entries, {} files)",
        manifest.name,
        manifest.root.display(),
        manifest.spec.len(),
        manifest.spec.file_count()
    );
    if let Some(desc) = &manifest.description {
        let _ = writeln!(out, "  {}", desc);
    }
    for entry in &manifest.spec {
        match entry {
            Entry::Dir { path } => {
                let _ = writeln!(out, "  dir   {}/", path.display());
            }
            Entry::File { path, content } => {
                let _ = writeln!(out, "  file  {} ({} bytes)", path.display(), content.len());
            }
        }
    }
    out
}
