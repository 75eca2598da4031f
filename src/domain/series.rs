//! Learning series: a titled, ordered collection of episodes.

use serde::{Deserialize, Serialize};

use super::episode::Episode;

/// Difficulty level of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => anyhow::bail!("Unknown difficulty: {}", s),
        }
    }
}

/// One course in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Module id; equal to the catalog key the series is stored under
    pub id: String,

    /// Display title
    pub title: String,

    /// Display description
    pub description: String,

    /// Planned number of episodes. Authored independently of `episodes`
    /// and may not match its length.
    pub total_episodes: u32,

    /// Human-readable duration, e.g. "10 weeks"
    pub estimated_duration: String,

    /// Difficulty level
    pub difficulty: Difficulty,

    /// Classification tag, conventionally equal to `id`
    pub category: String,

    /// Episodes in authoring order
    #[serde(default)]
    pub episodes: Vec<Episode>,

    /// What a reader should know beforehand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Vec<String>>,

    /// What a reader should be able to do afterwards
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
}

impl Series {
    /// Whether any episode content is available.
    ///
    /// An empty series is how the catalog says "nothing here yet"; it is not
    /// an error condition.
    pub fn has_content(&self) -> bool {
        !self.episodes.is_empty()
    }

    /// Number of episodes actually authored
    pub fn authored_episode_count(&self) -> usize {
        self.episodes.len()
    }

    /// Whether every planned episode has been authored
    pub fn is_fully_authored(&self) -> bool {
        self.authored_episode_count() >= self.total_episodes as usize
    }

    /// Episodes sorted by part number
    pub fn episodes_in_reading_order(&self) -> Vec<&Episode> {
        let mut episodes: Vec<_> = self.episodes.iter().collect();
        episodes.sort_by_key(|e| e.part_number);
        episodes
    }

    /// Find an episode by its part number
    pub fn episode(&self, part_number: u32) -> Option<&Episode> {
        self.episodes.iter().find(|e| e.part_number == part_number)
    }

    /// Total reading time of authored episodes, in minutes (saturates)
    pub fn total_read_time(&self) -> u32 {
        self.episodes
            .iter()
            .map(|e| e.read_time)
            .fold(0u32, u32::saturating_add)
    }
}
