//! Reading papers from JSON files.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use unischedule_core::Paper;

/// Accepted top-level shapes of a papers file.
#[derive(Deserialize)]
#[serde(untagged)]
enum PapersFile {
    List(Vec<Paper>),
    Wrapped {
        #[serde(default)]
        papers: Vec<Paper>,
    },
}

/// Load papers from a JSON file.
pub fn load_papers(path: &Path) -> Result<Vec<Paper>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read papers file {}", path.display()))?;

    parse_papers(&content).with_context(|| format!("Invalid papers file {}", path.display()))
}

/// Parse a papers document. `null` counts as no papers.
pub fn parse_papers(content: &str) -> Result<Vec<Paper>> {
    let file: Option<PapersFile> = serde_json::from_str(content)?;

    Ok(match file {
        Some(PapersFile::List(papers)) | Some(PapersFile::Wrapped { papers }) => papers,
        None => Vec::new(),
    })
}
