//! Catalog construction errors and warnings.
//!
//! Errors are fatal at build time. Warnings describe authored data that is
//! allowed but probably unintended; they are logged and kept on the catalog.

use thiserror::Error;

/// A reason the catalog cannot be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate series id: {id}")]
    DuplicateSeries { id: String },

    #[error("Series stored under key {key:?} has id {id:?}")]
    KeyMismatch { key: String, id: String },

    #[error("Series id must not be empty")]
    EmptySeriesId,

    #[error("Series {series}: duplicate episode id {episode}")]
    DuplicateEpisodeId { series: String, episode: String },

    #[error("Series {series}: part number {part_number} used more than once")]
    DuplicatePartNumber { series: String, part_number: u32 },

    #[error("Series {series}: episode {episode} has part number 0")]
    InvalidPartNumber { series: String, episode: String },

    #[error("Series {series}: episode {episode} has read time 0")]
    InvalidReadTime { series: String, episode: String },

    #[error("Series {series}: missing required field {field}")]
    MissingField { series: String, field: String },
}

/// Authored data that is tolerated but worth flagging
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogWarning {
    #[error("Series {series}: totalEpisodes is {declared} but {authored} episode(s) are authored")]
    TotalEpisodesDrift {
        series: String,
        declared: u32,
        authored: usize,
    },

    #[error("Series {series}: part numbers are not contiguous from 1 (missing {missing})")]
    NonContiguousParts { series: String, missing: u32 },

    #[error("Series {series}: episode {episode} does not follow the {expected} id convention")]
    UnconventionalEpisodeId {
        series: String,
        episode: String,
        expected: String,
    },
}
