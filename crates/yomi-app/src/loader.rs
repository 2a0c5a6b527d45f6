use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use yomi_types::TermTree;

/// Term file syntax, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermFormat {
    Json,
    Yaml,
}

impl TermFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(TermFormat::Json),
            "yml" | "yaml" => Some(TermFormat::Yaml),
            _ => None,
        }
    }
}

pub struct TermFile {
    pub path: PathBuf,
    pub tree: TermTree,
}

/// Load every term file under `dir`, in path order
pub fn load_terms(dir: &Path) -> anyhow::Result<Vec<TermFile>> {
    let mut paths = Vec::new();
    find_term_files(dir, &mut paths)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;
    paths.sort();

    tracing::info!("Found {} term files in {}", paths.len(), dir.display());

    paths
        .into_iter()
        .map(|path| -> anyhow::Result<TermFile> {
            let tree = load_term_file(&path)?;
            tracing::debug!("Loaded {} top-level categories from {}", tree.len(), path.display());
            Ok(TermFile { path, tree })
        })
        .collect()
}

pub fn load_term_file(path: &Path) -> anyhow::Result<TermTree> {
    let format = TermFormat::from_path(path)
        .with_context(|| format!("Unsupported term file {}", path.display()))?;

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let tree: TermTree = match format {
        TermFormat::Json => serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        TermFormat::Yaml => serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
    };

    Ok(tree)
}

fn find_term_files(dir: &Path, paths: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            find_term_files(&path, paths)?;
        } else if TermFormat::from_path(&path).is_some() {
            paths.push(path);
        }
    }

    Ok(())
}
