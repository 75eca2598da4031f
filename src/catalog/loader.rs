//! Externalized series documents.
//!
//! Each file holds one `Series` in the same schema the catalog serves
//! (`partNumber`, `readTime`, `publishedAt`, ...). JSON and YAML are
//! accepted, chosen by file extension.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::info;

use super::service::SeriesCatalog;
use crate::domain::Series;

/// Serialization format for documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => anyhow::bail!("Unsupported series document: {}", path.display()),
        }
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => anyhow::bail!("Unknown document format: {}", s),
        }
    }
}

/// Expand glob patterns into a sorted, de-duplicated list of files
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let entries =
            glob::glob(pattern).with_context(|| format!("Invalid source pattern: {}", pattern))?;
        for entry in entries {
            let path = entry.with_context(|| format!("Failed to read match for: {}", pattern))?;
            if path.is_file() {
                paths.push(path);
            }
        }
    }

    paths.sort();
    paths.dedup();
    Ok(paths)
}

/// Parse one series document
pub async fn load_document(path: &Path) -> Result<Series> {
    let format = DocumentFormat::from_path(path)?;

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read series document: {}", path.display()))?;

    parse_document(&content, format)
        .with_context(|| format!("Failed to parse series document: {}", path.display()))
}

/// Parse a series from a string in the given format
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Series> {
    let series = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(series)
}

/// Load every document matched by `patterns`
pub async fn load_documents(patterns: &[String]) -> Result<Vec<Series>> {
    let paths = expand_patterns(patterns)?;
    let mut documents = Vec::with_capacity(paths.len());

    for path in &paths {
        let series = load_document(path).await?;
        info!(module_id = %series.id, path = %path.display(), "Loaded series document");
        documents.push(series);
    }

    Ok(documents)
}

/// Render the whole catalog as one document keyed by module id
pub fn export_documents(catalog: &SeriesCatalog, format: DocumentFormat) -> Result<String> {
    let entries: &BTreeMap<String, Arc<Series>> = catalog.get_all_series();

    let rendered = match format {
        DocumentFormat::Json => {
            serde_json::to_string_pretty(entries).context("Failed to serialize catalog as JSON")?
        }
        DocumentFormat::Yaml => {
            serde_yaml::to_string(entries).context("Failed to serialize catalog as YAML")?
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML_DOC: &str = r##"
id: rust
title: Rust Fundamentals
description: Ownership without tears
totalEpisodes: 2
estimatedDuration: 2 weeks
difficulty: Intermediate
category: rust
episodes:
  - id: rust-part-1
    partNumber: 1
    title: Ownership
    summary: Moves and borrows
    content: "# Ownership"
    readTime: 9
    publishedAt: "2024-05-01T08:00:00Z"
    tags: [rust]
learningOutcomes:
  - Reason about lifetimes
"##;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.json")).unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("b.yml")).unwrap(),
            DocumentFormat::Yaml
        );
        assert!(DocumentFormat::from_path(Path::new("b.toml")).is_err());
        assert!(DocumentFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<DocumentFormat>().unwrap(), DocumentFormat::Json);
        assert_eq!("yml".parse::<DocumentFormat>().unwrap(), DocumentFormat::Yaml);
        assert!("toml".parse::<DocumentFormat>().is_err());
    }

    #[test]
    fn test_parse_yaml_document() {
        let series = parse_document(YAML_DOC, DocumentFormat::Yaml).unwrap();
        assert_eq!(series.id, "rust");
        assert_eq!(series.episodes.len(), 1);
        assert_eq!(series.episodes[0].read_time, 9);
        assert!(series.prerequisites.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_difficulty() {
        let doc = YAML_DOC.replace("Intermediate", "Expert");
        assert!(parse_document(&doc, DocumentFormat::Yaml).is_err());
    }

    #[tokio::test]
    async fn test_load_documents_from_glob() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("rust.yaml"), YAML_DOC).unwrap();
        std::fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let pattern = format!("{}/*.yaml", temp.path().display());
        let docs = load_documents(&[pattern]).await.unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "Rust Fundamentals");
    }

    #[tokio::test]
    async fn test_load_document_reports_path_on_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_document(&path).await.unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }

    #[test]
    fn test_export_is_keyed_by_id() {
        let catalog = SeriesCatalog::builtin().unwrap();
        let json = export_documents(catalog, DocumentFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for (key, series) in value.as_object().unwrap() {
            assert_eq!(series["id"].as_str(), Some(key.as_str()));
        }
    }
}
