use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

mod manifest;
mod materialize;
mod render;

pub type Result<T> = anyhow::Result<T>;

use manifest::{Manifest, preset};
use materialize::ExistingFiles;

#[derive(Parser)]
#[command(name = "frontend-scaffold")]
#[command(about = "Create a frontend project skeleton of placeholder files", long_about = None)]
struct Cli {
    /// Without a subcommand, the default preset is created in the working directory.
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the directories and files described by a preset or manifest.
    Create {
        #[command(flatten)]
        source: SourceArgs,

        /// Base directory (overrides the manifest's root).
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,

        /// What to do with files that already exist.
        #[arg(long, value_enum, default_value_t = ExistingFiles::Overwrite)]
        existing: ExistingFiles,
    },
    /// Print what a preset or manifest would create, without touching disk.
    List {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List the built-in presets.
    Presets,
}

#[derive(Args)]
struct SourceArgs {
    /// Built-in preset name.
    #[arg(long, conflicts_with = "manifest")]
    preset: Option<String>,

    /// Manifest file (.json, or a plain-text listing).
    #[arg(long)]
    manifest: Option<PathBuf>,
}

impl SourceArgs {
    fn load(&self) -> Result<Manifest> {
        match (&self.manifest, &self.preset) {
            (Some(path), _) => manifest::load(path),
            (None, Some(name)) => preset::builtin(name),
            (None, None) => preset::builtin(preset::DEFAULT_PRESET),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        None => {
            let manifest = preset::builtin(preset::DEFAULT_PRESET)?;
            create(&manifest, None, ExistingFiles::Overwrite)?;
        }
        Some(Commands::Create {
            source,
            out,
            existing,
        }) => {
            let manifest = source.load()?;
            create(&manifest, out.as_deref(), existing)?;
        }
        Some(Commands::List { source }) => {
            let manifest = source.load()?;
            print!("{}", render::render_listing(&manifest));
        }
        Some(Commands::Presets) => {
            for name in preset::names() {
                let manifest = preset::builtin(name)?;
                println!(
                    "{:<8} {}",
                    name,
                    manifest.description.as_deref().unwrap_or_default()
                );
            }
        }
    }

    Ok(())
}

fn create(manifest: &Manifest, out: Option<&Path>, existing: ExistingFiles) -> Result<()> {
    let base = out.unwrap_or(&manifest.root);
    println!("Creating {} scaffold under: {}", manifest.name, base.display());

    let mut stdout = std::io::stdout().lock();
    let outcome = materialize::materialize(base, &manifest.spec, existing, &mut stdout)?;
    drop(stdout);

    print!("{}", render::render_summary(manifest, base, &outcome));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn source_of(args: &[&str]) -> SourceArgs {
        match Cli::try_parse_from(args).unwrap().cmd {
            Some(Commands::Create { source, .. }) | Some(Commands::List { source }) => source,
            _ => panic!("no source arguments in {:?}", args),
        }
    }

    #[test]
    fn no_source_falls_back_to_default_preset() {
        let manifest = source_of(&["frontend-scaffold", "list"]).load().unwrap();
        assert_eq!(manifest.name, preset::DEFAULT_PRESET);
    }

    #[test]
    fn preset_flag_selects_builtin() {
        let manifest = source_of(&["frontend-scaffold", "create", "--preset", "next"])
            .load()
            .unwrap();
        assert_eq!(manifest.name, "next");
    }

    #[test]
    fn manifest_flag_reads_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("site.tree");
        std::fs::write(&path, "index.html\n").unwrap();

        let manifest = source_of(&[
            "frontend-scaffold",
            "create",
            "--manifest",
            path.to_str().unwrap(),
        ])
        .load()
        .unwrap();
        assert_eq!(manifest.name, "site");
        assert_eq!(manifest.spec.len(), 1);
    }

    #[test]
    fn preset_and_manifest_conflict() {
        assert!(
            Cli::try_parse_from([
                "frontend-scaffold",
                "create",
                "--preset",
                "react",
                "--manifest",
                "x.json",
            ])
            .is_err()
        );
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        assert!(Cli::try_parse_from(["frontend-scaffold"]).unwrap().cmd.is_none());
    }
}
