//! Built-in manifests shipped inside the binary.

use crate::manifest::entry::Manifest;
use crate::manifest::file::ManifestFile;
use anyhow::{Context, anyhow};

/// Preset used when no manifest or preset is given.
pub const DEFAULT_PRESET: &str = "react";

const PRESETS: &[(&str, &str)] = &[
    ("react", include_str!("../../presets/react.json")),
    ("next", include_str!("../../presets/next.json")),
];

pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

pub fn builtin(name: &str) -> anyhow::Result<Manifest> {
    let (_, text) = PRESETS
        .iter()
        .find(|(n, _)| *n == name)
        .ok_or_else(|| {
            anyhow!(
                "unknown preset {:?} (available: {})",
                name,
                names().collect::<Vec<_>>().join(", ")
            )
        })?;

    ManifestFile::from_json(text)
        .and_then(|raw| raw.validate_and_build(name))
        .with_context(|| format!("built-in preset {}", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Entry;
    use std::path::Path;

    #[test]
    fn every_preset_parses() {
        for name in names() {
            let manifest = builtin(name).unwrap();
            assert_eq!(manifest.name, name);
            assert!(!manifest.spec.is_empty(), "preset {} is empty", name);
            assert!(!manifest.next_steps.is_empty(), "preset {} has no next steps", name);
        }
    }

    #[test]
    fn default_preset_writes_under_frontend_plus_readme() {
        let manifest = builtin(DEFAULT_PRESET).unwrap();
        for entry in &manifest.spec {
            let path = entry.path();
            assert!(
                path.starts_with("frontend") || path == Path::new("README.md"),
                "unexpected path {}",
                path.display()
            );
        }
        assert!(manifest.spec.iter().any(|e| matches!(
            e,
            Entry::File { path, content } if path == Path::new("frontend/public/favicon.ico") && content.is_empty()
        )));
    }

    #[test]
    fn next_preset_declares_empty_directories() {
        let manifest = builtin("next").unwrap();
        assert!(manifest.spec.iter().any(|e| *e == Entry::dir("public/images")));
        assert!(manifest
            .spec
            .iter()
            .all(|e| matches!(e, Entry::Dir { .. }) || matches!(e, Entry::File { content, .. } if content.is_empty())));
    }

    #[test]
    fn unknown_preset_lists_available_names() {
        let err = builtin("angular").unwrap_err().to_string();
        assert!(err.contains("react"), "{}", err);
        assert!(err.contains("next"), "{}", err);
    }
}
