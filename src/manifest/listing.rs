//! Plain-text tree listing (scaffold.tree).
//!
//! One entry per line:
//!   # comment
//!   app/(auth)/login/            directory (trailing '/')
//!   app/(auth)/login/page.tsx    empty file
//!   src/App.tsx <<EOF            file whose content is every following line
//!   ...                          up to a line reading exactly `EOF`
//!   EOF
//!
//! Heredoc bodies keep each line exactly as written, including its line
//! ending (`\n` or `\r\n`). Blank lines outside a heredoc are ignored. A
//! line containing `<<` without a space-separated tag is an error.

use crate::manifest::entry::{Entry, Manifest, PathSpec};
use crate::manifest::file::stem_of;
use anyhow::{Context, bail};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

// 1) path: everything up to an optional heredoc marker
// 2) tag: heredoc terminator
const ENTRY_LINE_RE: &str = r#"^\s*(.+?)(?:\s+<<\s*([A-Za-z_][A-Za-z0-9_]*))?\s*$"#;

/// Parse listing text into a `PathSpec`. `origin` names the source in errors.
pub fn parse_listing(text: &str, origin: &str) -> anyhow::Result<PathSpec> {
    let re = Regex::new(ENTRY_LINE_RE)?;

    let mut spec = PathSpec::new();
    let mut lines = text.split_inclusive('\n').enumerate();
    while let Some((lineno, raw_line)) = lines.next() {
        let lno = lineno + 1;
        let line = raw_line.trim_end_matches(['\n', '\r']);

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(caps) = re.captures(line) else {
            bail!(
                "listing parse error at {}:{}: cannot parse line: {:?}",
                origin,
                lno,
                line
            );
        };
        let path = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        if path.contains("<<") {
            bail!(
                "listing parse error at {}:{}: heredoc marker needs a tag after ' <<': {:?}",
                origin,
                lno,
                line
            );
        }

        match caps.get(2) {
            Some(tag) => {
                if path.ends_with('/') {
                    bail!(
                        "listing parse error at {}:{}: directory cannot take content: {}",
                        origin,
                        lno,
                        path
                    );
                }
                let tag = tag.as_str();
                let mut content = String::new();
                let mut closed = false;
                for (_, body) in lines.by_ref() {
                    if body.trim_end() == tag {
                        closed = true;
                        break;
                    }
                    content.push_str(body);
                }
                if !closed {
                    bail!(
                        "listing parse error at {}:{}: heredoc {} for {} is never closed",
                        origin,
                        lno,
                        tag,
                        path
                    );
                }
                spec.push(Entry::file(path, content));
            }
            None => match path.strip_suffix('/') {
                Some(dir) => spec.push(Entry::dir(dir)),
                None => spec.push(Entry::file(path, "")),
            },
        }
    }

    Ok(spec)
}

/// Read a listing file from disk. Its root is the working directory.
pub fn load_listing(path: &Path) -> anyhow::Result<Manifest> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read listing file {}", path.display()))?;
    let spec = parse_listing(&text, &path.display().to_string())?;

    Ok(Manifest {
        name: stem_of(path),
        description: None,
        root: PathBuf::from("."),
        spec,
        next_steps: Vec::new(),
    })
}
