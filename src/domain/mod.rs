//! Domain types for the learning-series catalog.
//!
//! - Series: one course with descriptive metadata
//! - Episode: one lesson within a series

pub mod episode;
pub mod series;

// Re-export commonly used types
pub use episode::Episode;
pub use series::{Difficulty, Series};
