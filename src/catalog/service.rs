//! The read-only series catalog.
//!
//! Lookups are total: an unknown module id resolves to a placeholder series
//! instead of an error. Callers detect "no content" with
//! `Series::has_content`.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::builder::CatalogBuilder;
use super::error::CatalogWarning;
use super::fallback;
use super::loader;
use crate::config::ResolvedConfig;
use crate::domain::Series;

/// Module ids longer than this are truncated in log output
pub const MAX_LOGGED_ID_LEN: usize = 128;

/// Process-wide catalog of compiled-in content (stores Result to handle init errors)
static BUILTIN: OnceLock<Result<SeriesCatalog, String>> = OnceLock::new();

/// Immutable mapping from module id to series
#[derive(Debug, Clone)]
pub struct SeriesCatalog {
    entries: BTreeMap<String, Arc<Series>>,
    warnings: Vec<CatalogWarning>,
}

impl SeriesCatalog {
    pub(super) fn from_parts(
        entries: BTreeMap<String, Arc<Series>>,
        warnings: Vec<CatalogWarning>,
    ) -> Self {
        Self { entries, warnings }
    }

    /// Get the catalog of compiled-in content (built once, then cached)
    pub fn builtin() -> Result<&'static SeriesCatalog> {
        let result = BUILTIN.get_or_init(|| {
            CatalogBuilder::with_builtin()
                .and_then(CatalogBuilder::build)
                .map_err(|e| e.to_string())
        });

        match result {
            Ok(catalog) => Ok(catalog),
            Err(e) => anyhow::bail!("Invalid builtin catalog: {}", e),
        }
    }

    /// Build a catalog from configuration plus any extra source patterns.
    ///
    /// Meant to run once at startup; any error here is fatal.
    pub async fn bootstrap(config: &ResolvedConfig, extra_sources: &[String]) -> Result<Self> {
        let mut builder = if config.include_builtin {
            CatalogBuilder::with_builtin()?
        } else {
            CatalogBuilder::new()
        };

        let mut patterns = config.sources.clone();
        patterns.extend(extra_sources.iter().cloned());

        let documents = loader::load_documents(&patterns).await?;
        builder.register_all(documents)?;

        let catalog = builder.build().context("Failed to build series catalog")?;
        debug!(entries = catalog.len(), "Series catalog ready");
        Ok(catalog)
    }

    /// Resolve a module id to its series, or to a placeholder if unknown.
    ///
    /// Matching is exact: no trimming or case folding.
    pub fn get_module_series(&self, module_id: &str) -> Arc<Series> {
        match self.entries.get(module_id) {
            Some(series) => Arc::clone(series),
            None => {
                debug!(module_id = %loggable(module_id), "Unknown module id, using default series");
                self.get_default_series(module_id)
            }
        }
    }

    /// All authored series, keyed by module id
    pub fn get_all_series(&self) -> &BTreeMap<String, Arc<Series>> {
        &self.entries
    }

    /// Placeholder series for a module id with no authored entry
    pub fn get_default_series(&self, module_id: &str) -> Arc<Series> {
        Arc::new(fallback::default_series(module_id))
    }

    /// Whether an authored entry exists for `module_id`
    pub fn contains(&self, module_id: &str) -> bool {
        self.entries.contains_key(module_id)
    }

    /// Authored module ids in sorted order
    pub fn module_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of authored series
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no authored series
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Non-fatal findings from construction
    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }

    /// SHA256 of the catalog's JSON form, hex encoded
    pub fn digest(&self) -> Result<String> {
        let json = serde_json::to_vec(&self.entries).context("Failed to serialize catalog")?;
        let mut hasher = Sha256::new();
        hasher.update(&json);
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Render a caller-supplied id safely for log output
fn loggable(module_id: &str) -> String {
    let escaped: String = module_id.escape_debug().collect();
    if escaped.len() <= MAX_LOGGED_ID_LEN {
        return escaped;
    }

    let mut end = MAX_LOGGED_ID_LEN;
    while !escaped.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &escaped[..end])
}
