//! Command-line interface for learnseries.
//!
//! Operator tooling over the catalog: show one series, list all series,
//! export the catalog as documents, validate content, show config.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::{loader, DocumentFormat, SeriesCatalog};
use crate::config;
use crate::domain::Series;

/// learnseries - Read-only learning series catalog
#[derive(Parser, Debug)]
#[command(name = "learnseries")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Extra series documents to load (glob, repeatable)
    #[arg(long = "source", global = true)]
    pub sources: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Catalog(CatalogCommand),

    /// Show resolved configuration (debug)
    Config,
}

/// Commands that need a built catalog
#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Show one series by module id
    Show {
        /// Module id (e.g. "excel")
        module_id: String,

        /// Print the series as JSON
        #[arg(long)]
        json: bool,

        /// Include full episode content
        #[arg(short, long)]
        full: bool,
    },

    /// List all authored series
    List,

    /// Export the catalog as documents keyed by module id
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the catalog and report problems
    Validate,
}

/// Export format for CLI (maps to DocumentFormat)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl From<ExportFormat> for DocumentFormat {
    fn from(f: ExportFormat) -> Self {
        match f {
            ExportFormat::Json => DocumentFormat::Json,
            ExportFormat::Yaml => DocumentFormat::Yaml,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Config => show_config(),
            Commands::Catalog(command) => {
                let catalog = load_catalog(&self.sources).await?;
                command.run(&catalog).await
            }
        }
    }
}

impl CatalogCommand {
    async fn run(self, catalog: &SeriesCatalog) -> Result<()> {
        match self {
            CatalogCommand::Show {
                module_id,
                json,
                full,
            } => show_series(catalog, &module_id, json, full),
            CatalogCommand::List => list_series(catalog),
            CatalogCommand::Export { format, output } => {
                export_catalog(catalog, format.into(), output).await
            }
            CatalogCommand::Validate => validate_catalog(catalog),
        }
    }
}

/// Build the catalog once for this invocation
async fn load_catalog(extra_sources: &[String]) -> Result<SeriesCatalog> {
    let config = config::config()?;
    SeriesCatalog::bootstrap(config, extra_sources).await
}

fn show_series(catalog: &SeriesCatalog, module_id: &str, json: bool, full: bool) -> Result<()> {
    let series = catalog.get_module_series(module_id);

    if json {
        let mut value = serde_json::to_value(series.as_ref())?;
        if !full {
            strip_content(&mut value);
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_series(&series, full);
    Ok(())
}

/// Drop episode bodies from a serialized series
fn strip_content(value: &mut serde_json::Value) {
    if let Some(episodes) = value.get_mut("episodes").and_then(|e| e.as_array_mut()) {
        for episode in episodes {
            if let Some(obj) = episode.as_object_mut() {
                obj.remove("content");
            }
        }
    }
}

fn print_series(series: &Series, full: bool) {
    println!("{}", series.title);
    println!("{}", "=".repeat(series.title.chars().count().max(1)));
    println!("  ID: {}", series.id);
    println!("  Difficulty: {}", series.difficulty);
    println!("  Duration: {}", series.estimated_duration);
    println!(
        "  Episodes: {} of {} authored",
        series.authored_episode_count(),
        series.total_episodes
    );
    if let Some(ref prerequisites) = series.prerequisites {
        println!("  Prerequisites: {}", prerequisites.join(", "));
    }
    println!("\n{}", series.description);

    if !series.learning_outcomes.is_empty() {
        println!("\nYou will learn to:");
        for outcome in &series.learning_outcomes {
            println!("  - {}", outcome);
        }
    }

    if !series.has_content() {
        println!("\nNo content is available for this module yet.");
        return;
    }

    println!("\n{:<6} {:<8} {:<50}", "PART", "MINUTES", "TITLE");
    println!("{}", "-".repeat(66));
    for episode in series.episodes_in_reading_order() {
        println!(
            "{:<6} {:<8} {:<50}",
            episode.part_number, episode.read_time, episode.title
        );
        if full {
            println!("\n{}\n", episode.content);
        }
    }
    println!("\nTotal reading time: {} min", series.total_read_time());
}

fn list_series(catalog: &SeriesCatalog) -> Result<()> {
    if catalog.is_empty() {
        println!("Catalog is empty.");
        return Ok(());
    }

    println!(
        "{:<20} {:<14} {:<10} {:<40}",
        "ID", "DIFFICULTY", "EPISODES", "TITLE"
    );
    println!("{}", "-".repeat(84));

    for (id, series) in catalog.get_all_series() {
        let episodes = format!(
            "{}/{}",
            series.authored_episode_count(),
            series.total_episodes
        );
        println!(
            "{:<20} {:<14} {:<10} {:<40}",
            id,
            series.difficulty.to_string(),
            episodes,
            truncate(&series.title, 40)
        );
    }

    println!("\nTotal: {} series", catalog.len());
    Ok(())
}

async fn export_catalog(
    catalog: &SeriesCatalog,
    format: DocumentFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let rendered = loader::export_documents(catalog, format)?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("Failed to write export: {}", path.display()))?;
            eprintln!("Exported {} series to {}", catalog.len(), path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn validate_catalog(catalog: &SeriesCatalog) -> Result<()> {
    println!("Catalog OK: {} series", catalog.len());
    println!("Digest: {}", catalog.digest()?);

    if catalog.warnings().is_empty() {
        println!("No warnings.");
    } else {
        println!("\nWarnings ({}):", catalog.warnings().len());
        for warning in catalog.warnings() {
            println!("  - {}", warning);
        }
    }
    Ok(())
}

fn show_config() -> Result<()> {
    let config = config::config()?;

    println!("Include builtin: {}", config.include_builtin);
    match config.config_file {
        Some(ref path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none, using defaults)"),
    }
    if config.sources.is_empty() {
        println!("Sources: (none)");
    } else {
        println!("Sources:");
        for source in &config.sources {
            println!("  {}", source);
        }
    }
    Ok(())
}

/// Truncate to `max` characters, marking the cut with "..."
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
