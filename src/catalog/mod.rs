//! Read-only catalog of learning series.
//!
//! # Lookup contract
//!
//! ```text
//! module id ──► SeriesCatalog::get_module_series ──► Arc<Series>
//!                     │ hit: stored series
//!                     └ miss: fallback::default_series(id), no episodes
//! ```
//!
//! The catalog is built once (builtin content plus optional documents),
//! validated by `CatalogBuilder`, and never mutated afterwards.

pub mod builder;
pub mod builtin;
pub mod error;
pub mod fallback;
pub mod loader;
pub mod service;

pub use builder::CatalogBuilder;
pub use error::{CatalogError, CatalogWarning};
pub use fallback::default_series;
pub use loader::DocumentFormat;
pub use service::SeriesCatalog;
