//! A single lesson within a learning series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One article/lesson unit of a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Identifier, unique within the parent series
    pub id: String,

    /// Reading order position (1-based)
    pub part_number: u32,

    /// Display title
    pub title: String,

    /// Short teaser shown in listings
    pub summary: String,

    /// Markdown body, opaque to the catalog
    pub content: String,

    /// Estimated reading time in minutes
    pub read_time: u32,

    /// Per-reader progress, owned by a progress tracker elsewhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,

    /// When the episode was published
    pub published_at: DateTime<Utc>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Episode {
    /// Create an episode using the conventional `{series}-part-{n}` id
    pub fn new(series_id: &str, part_number: u32, title: impl Into<String>) -> Self {
        Self {
            id: Self::conventional_id(series_id, part_number),
            part_number,
            title: title.into(),
            summary: String::new(),
            content: String::new(),
            read_time: 1,
            is_completed: None,
            published_at: DateTime::<Utc>::default(),
            tags: Vec::new(),
        }
    }

    /// The id an episode is expected to carry within its series
    pub fn conventional_id(series_id: &str, part_number: u32) -> String {
        format!("{}-part-{}", series_id, part_number)
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the markdown body
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the reading time in minutes
    pub fn with_read_time(mut self, minutes: u32) -> Self {
        self.read_time = minutes;
        self
    }

    /// Set the publication timestamp
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = published_at;
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}
