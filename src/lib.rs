//! learnseries - Read-only learning series catalog
//!
//! Serves structured "learning series" (ordered collections of long-form
//! articles) keyed by a module id, for a presentation layer to render.
//!
//! # Contract
//!
//! - `SeriesCatalog::get_module_series` never fails: unknown ids resolve to
//!   a placeholder series with no episodes
//! - `SeriesCatalog::get_all_series` returns every authored entry, keyed by
//!   its own id
//! - The catalog is validated once at construction and never mutated
//!
//! # Modules
//!
//! - `domain`: Data structures (Series, Episode, Difficulty)
//! - `catalog`: Construction, validation, lookup and fallback
//! - `config`: Content sources and builtin toggle
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Show one series
//! learnseries show excel
//!
//! # Check builtin plus external content
//! learnseries validate --source 'series/*.yaml'
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;

// Re-export main types at crate root for convenience
pub use catalog::{CatalogBuilder, CatalogError, CatalogWarning, SeriesCatalog};
pub use domain::{Difficulty, Episode, Series};
