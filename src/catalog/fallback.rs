//! Placeholder series for module ids with no authored entry.
//!
//! Kept as a pure function of the requested id so the lookup path stays a
//! plain map access with one fallback branch.

use crate::domain::{Difficulty, Series};

/// Planned episode count advertised by a placeholder series
pub const DEFAULT_TOTAL_EPISODES: u32 = 8;

/// Duration advertised by a placeholder series
pub const DEFAULT_ESTIMATED_DURATION: &str = "8 weeks";

/// Build the placeholder series for `module_id`.
///
/// The result is well-formed in every field and has no episodes.
pub fn default_series(module_id: &str) -> Series {
    let topic = display_name(module_id);

    let (title, description) = if topic.is_empty() {
        (
            "Learning Series".to_string(),
            "A structured learning path for this topic. Content for this module is coming soon."
                .to_string(),
        )
    } else {
        (
            format!("{} Learning Series", topic),
            format!(
                "A structured learning path for {}. Content for this module is coming soon.",
                topic
            ),
        )
    };

    Series {
        id: module_id.to_string(),
        title,
        description,
        total_episodes: DEFAULT_TOTAL_EPISODES,
        estimated_duration: DEFAULT_ESTIMATED_DURATION.to_string(),
        difficulty: Difficulty::Beginner,
        category: module_id.to_string(),
        episodes: Vec::new(),
        prerequisites: None,
        learning_outcomes: vec![
            "Understand the core concepts".to_string(),
            "Apply them in practical exercises".to_string(),
            "Build a small real-world project".to_string(),
        ],
    }
}

/// Human-friendly rendering of a module id: "sql-database" -> "Sql Database"
pub fn display_name(module_id: &str) -> String {
    module_id
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
