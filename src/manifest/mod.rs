//! Manifest layer: where a tree description comes from.
//!
//! Sources:
//! - JSON manifests (`*.json`)
//! - plain-text listings (anything else)
//! - presets compiled into the binary

pub mod entry;
pub mod file;
pub mod listing;
pub mod preset;

pub use entry::{Entry, Manifest, PathSpec};

use std::path::Path;

/// Load a manifest from disk, picking the format from the file extension.
pub fn load(path: &Path) -> anyhow::Result<Manifest> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => file::load_json_manifest(path),
        _ => listing::load_listing(path),
    }
}
