//! Series Document Integration Tests
//!
//! Loading externalized series documents into a catalog at startup.

use std::path::Path;

use learnseries::catalog::loader::{self, DocumentFormat};
use learnseries::config::ResolvedConfig;
use learnseries::{CatalogBuilder, CatalogError, SeriesCatalog};
use tempfile::TempDir;

const RUST_JSON: &str = r##"{
  "id": "rust",
  "title": "Rust Fundamentals",
  "description": "Ownership, borrowing and traits",
  "totalEpisodes": 2,
  "estimatedDuration": "3 weeks",
  "difficulty": "Advanced",
  "category": "rust",
  "episodes": [
    {
      "id": "rust-part-2",
      "partNumber": 2,
      "title": "Borrowing",
      "summary": "Shared and mutable references",
      "content": "# Borrowing",
      "readTime": 14,
      "publishedAt": "2024-06-10T09:00:00Z",
      "tags": ["rust", "borrowing", "rust"]
    },
    {
      "id": "rust-part-1",
      "partNumber": 1,
      "title": "Ownership",
      "summary": "Moves and drops",
      "content": "# Ownership",
      "readTime": 12,
      "publishedAt": "2024-06-03T09:00:00Z",
      "tags": []
    }
  ],
  "prerequisites": ["Any programming language"],
  "learningOutcomes": ["Explain ownership", "Use references safely"]
}"##;

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

fn config_with(sources: Vec<String>, include_builtin: bool) -> ResolvedConfig {
    ResolvedConfig {
        sources,
        include_builtin,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_bootstrap_merges_documents_with_builtin() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "rust.json", RUST_JSON);

    let pattern = format!("{}/*.json", temp.path().display());
    let catalog = SeriesCatalog::bootstrap(&config_with(vec![pattern], true), &[])
        .await
        .unwrap();

    assert!(catalog.contains("excel"));
    assert!(catalog.contains("rust"));

    let rust = catalog.get_module_series("rust");
    assert_eq!(rust.episodes.len(), 2);
    // Authoring order is preserved; reading order is derived
    assert_eq!(rust.episodes[0].part_number, 2);
    assert_eq!(rust.episodes_in_reading_order()[0].part_number, 1);
    assert_eq!(rust.episodes[0].tags.len(), 3);
}

#[tokio::test]
async fn test_bootstrap_without_builtin() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "rust.json", RUST_JSON);

    let pattern = format!("{}/*.json", temp.path().display());
    let catalog = SeriesCatalog::bootstrap(&config_with(Vec::new(), false), &[pattern])
        .await
        .unwrap();

    assert_eq!(catalog.len(), 1);
    assert!(!catalog.contains("excel"));
    assert!(!catalog.get_module_series("excel").has_content());
}

#[tokio::test]
async fn test_document_colliding_with_builtin_is_fatal() {
    let temp = TempDir::new().unwrap();
    let doc = RUST_JSON
        .replace("\"id\": \"rust\"", "\"id\": \"excel\"")
        .replace("rust-part-", "excel-part-");
    write(temp.path(), "excel.json", &doc);

    let pattern = format!("{}/*.json", temp.path().display());
    let err = SeriesCatalog::bootstrap(&config_with(vec![pattern], true), &[])
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<CatalogError>(),
        Some(&CatalogError::DuplicateSeries {
            id: "excel".to_string()
        })
    );
}

#[tokio::test]
async fn test_invalid_document_is_fatal() {
    let temp = TempDir::new().unwrap();
    let doc = RUST_JSON.replace("\"readTime\": 14", "\"readTime\": 0");
    write(temp.path(), "rust.json", &doc);

    let pattern = format!("{}/*.json", temp.path().display());
    let err = SeriesCatalog::bootstrap(&config_with(vec![pattern], false), &[])
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::InvalidReadTime { .. })
    ));
}

#[tokio::test]
async fn test_no_matches_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    let pattern = format!("{}/*.yaml", temp.path().display());

    let docs = loader::load_documents(&[pattern]).await.unwrap();
    assert!(docs.is_empty());
}

#[tokio::test]
async fn test_export_then_load_preserves_schema() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "rust.json", RUST_JSON);

    let pattern = format!("{}/*.json", temp.path().display());
    let docs = loader::load_documents(&[pattern]).await.unwrap();

    let mut builder = CatalogBuilder::new();
    builder.register_all(docs).unwrap();
    let catalog = builder.build().unwrap();

    let exported = loader::export_documents(&catalog, DocumentFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
    let rust = &value["rust"];

    assert_eq!(rust["totalEpisodes"], 2);
    assert_eq!(rust["difficulty"], "Advanced");
    assert_eq!(rust["episodes"][0]["partNumber"], 2);
    assert_eq!(rust["episodes"][0]["publishedAt"], "2024-06-10T09:00:00Z");
    assert!(rust["episodes"][0].get("isCompleted").is_none());
}

#[test]
fn test_yaml_export_lists_every_series() {
    let catalog = SeriesCatalog::builtin().unwrap();
    let yaml = loader::export_documents(catalog, DocumentFormat::Yaml).unwrap();

    for id in catalog.module_ids() {
        assert!(yaml.contains(&format!("{}:", id)), "missing {}", id);
    }
}
