//! Configuration for the series catalog.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (LEARNSERIES_SOURCES, appended to configured sources)
//! 2. Config file (.learnseries/config.yaml)
//! 3. Defaults (builtin content only)
//!
//! Config file discovery:
//! - Searches current directory and parents for .learnseries/config.yaml
//! - Source patterns in the config file are relative to the project root
//!   (the parent of .learnseries/)
//! - LEARNSERIES_SOURCES uses the platform path separator (`:` on Unix,
//!   `;` on Windows)

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// Glob patterns for externalized series documents
    #[serde(default)]
    pub sources: Vec<String>,
    /// Whether compiled-in series are part of the catalog
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
}

fn default_include_builtin() -> bool {
    true
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            include_builtin: default_include_builtin(),
        }
    }
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Glob patterns for series documents, resolved against the project root
    pub sources: Vec<String>,
    /// Whether compiled-in series are registered
    pub include_builtin: bool,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            include_builtin: true,
            config_file: None,
        }
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".learnseries").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a pattern that may be relative to the project root
fn resolve_pattern(base: &Path, pattern: &str) -> String {
    if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        base.join(pattern).to_string_lossy().into_owned()
    }
}

/// Split LEARNSERIES_SOURCES into patterns, skipping empty segments
fn split_sources(value: &OsStr) -> Vec<String> {
    std::env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_string_lossy().into_owned())
        .collect()
}

/// Resolve configuration from a starting directory and LEARNSERIES_SOURCES
fn load_config_from(
    start: Option<&Path>,
    env_sources: Option<&OsStr>,
) -> Result<ResolvedConfig> {
    let config_file = start.and_then(find_config_file);

    let (mut sources, include_builtin) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Base directory is the parent of .learnseries/
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        let sources = config
            .content
            .sources
            .iter()
            .map(|p| resolve_pattern(base_dir, p))
            .collect();

        (sources, config.content.include_builtin)
    } else {
        (Vec::new(), true)
    };

    if let Some(env_sources) = env_sources {
        sources.extend(split_sources(env_sources));
    }

    Ok(ResolvedConfig {
        sources,
        include_builtin,
        config_file,
    })
}

/// Load configuration from the process environment
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().ok();
    let env_sources = std::env::var_os("LEARNSERIES_SOURCES");
    load_config_from(cwd.as_deref(), env_sources.as_deref())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
