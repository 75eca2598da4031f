//! Registration and validation of catalog entries.
//!
//! All consistency checks run here, before a `SeriesCatalog` exists. Once
//! `build` succeeds the lookup path can trust the data unconditionally.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::builtin;
use super::error::{CatalogError, CatalogWarning};
use super::service::SeriesCatalog;
use crate::domain::{Episode, Series};

/// Collects series and freezes them into a `SeriesCatalog`
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: BTreeMap<String, Series>,
}

impl CatalogBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder pre-loaded with the compiled-in content
    pub fn with_builtin() -> Result<Self, CatalogError> {
        let mut builder = Self::new();
        builder.register_all(builtin::series())?;
        Ok(builder)
    }

    /// Register one series under its own id
    pub fn register(&mut self, series: Series) -> Result<&mut Self, CatalogError> {
        if series.id.is_empty() {
            return Err(CatalogError::EmptySeriesId);
        }
        if self.entries.contains_key(&series.id) {
            return Err(CatalogError::DuplicateSeries { id: series.id });
        }

        debug!(module_id = %series.id, episodes = series.episodes.len(), "Registered series");
        self.entries.insert(series.id.clone(), series);
        Ok(self)
    }

    /// Register several series, stopping at the first error
    pub fn register_all(
        &mut self,
        series: impl IntoIterator<Item = Series>,
    ) -> Result<&mut Self, CatalogError> {
        for s in series {
            self.register(s)?;
        }
        Ok(self)
    }

    /// Number of registered series
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate every entry and freeze the catalog
    pub fn build(self) -> Result<SeriesCatalog, CatalogError> {
        let mut warnings = Vec::new();

        for (key, series) in &self.entries {
            validate_series(key, series, &mut warnings)?;
        }

        for warning in &warnings {
            match warning {
                // Planned-but-unwritten episodes are normal for a series in progress
                CatalogWarning::TotalEpisodesDrift { .. } => info!("{}", warning),
                _ => warn!("{}", warning),
            }
        }

        let entries = self
            .entries
            .into_iter()
            .map(|(key, series)| (key, Arc::new(series)))
            .collect();

        Ok(SeriesCatalog::from_parts(entries, warnings))
    }
}

/// Check one series against the structural invariants
fn validate_series(
    key: &str,
    series: &Series,
    warnings: &mut Vec<CatalogWarning>,
) -> Result<(), CatalogError> {
    if series.id != key {
        return Err(CatalogError::KeyMismatch {
            key: key.to_string(),
            id: series.id.clone(),
        });
    }
    if series.title.trim().is_empty() {
        return Err(missing(series, "title"));
    }

    let mut episode_ids = HashSet::new();
    let mut part_numbers = HashSet::new();

    for episode in &series.episodes {
        validate_episode(series, episode)?;

        if !episode_ids.insert(episode.id.as_str()) {
            return Err(CatalogError::DuplicateEpisodeId {
                series: series.id.clone(),
                episode: episode.id.clone(),
            });
        }
        if !part_numbers.insert(episode.part_number) {
            return Err(CatalogError::DuplicatePartNumber {
                series: series.id.clone(),
                part_number: episode.part_number,
            });
        }

        let expected = Episode::conventional_id(&series.id, episode.part_number);
        if episode.id != expected {
            warnings.push(CatalogWarning::UnconventionalEpisodeId {
                series: series.id.clone(),
                episode: episode.id.clone(),
                expected,
            });
        }
    }

    // Part numbers are unique at this point, so a gap exists iff some
    // value in 1..=len is absent.
    let authored = series.episodes.len();
    if let Some(missing) = (1..=authored as u32).find(|n| !part_numbers.contains(n)) {
        warnings.push(CatalogWarning::NonContiguousParts {
            series: series.id.clone(),
            missing,
        });
    }

    if series.total_episodes as usize != authored {
        warnings.push(CatalogWarning::TotalEpisodesDrift {
            series: series.id.clone(),
            declared: series.total_episodes,
            authored,
        });
    }

    Ok(())
}

fn validate_episode(series: &Series, episode: &Episode) -> Result<(), CatalogError> {
    if episode.id.trim().is_empty() {
        return Err(missing(series, "episodes[].id"));
    }
    if episode.title.trim().is_empty() {
        return Err(missing(series, &format!("{}.title", episode.id)));
    }
    if episode.part_number == 0 {
        return Err(CatalogError::InvalidPartNumber {
            series: series.id.clone(),
            episode: episode.id.clone(),
        });
    }
    if episode.read_time == 0 {
        return Err(CatalogError::InvalidReadTime {
            series: series.id.clone(),
            episode: episode.id.clone(),
        });
    }
    Ok(())
}

fn missing(series: &Series, field: &str) -> CatalogError {
    CatalogError::MissingField {
        series: series.id.clone(),
        field: field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;

    fn series(id: &str, parts: &[u32]) -> Series {
        Series {
            id: id.to_string(),
            title: format!("{} course", id),
            description: String::new(),
            total_episodes: parts.len() as u32,
            estimated_duration: "2 weeks".to_string(),
            difficulty: Difficulty::Beginner,
            category: id.to_string(),
            episodes: parts
                .iter()
                .map(|&n| Episode::new(id, n, format!("Part {}", n)).with_read_time(5))
                .collect(),
            prerequisites: None,
            learning_outcomes: Vec::new(),
        }
    }

    #[test]
    fn test_build_valid_catalog() {
        let mut builder = CatalogBuilder::new();
        builder
            .register(series("go", &[1, 2]))
            .unwrap()
            .register(series("rust", &[1]))
            .unwrap();

        let catalog = builder.build().unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.warnings().is_empty());
    }

    #[test]
    fn test_duplicate_series_rejected_on_register() {
        let mut builder = CatalogBuilder::new();
        builder.register(series("go", &[1])).unwrap();

        let err = builder.register(series("go", &[1])).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSeries { id: "go".into() });
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut builder = CatalogBuilder::new();
        let err = builder.register(series("", &[])).unwrap_err();
        assert_eq!(err, CatalogError::EmptySeriesId);
    }

    #[test]
    fn test_duplicate_part_number_rejected() {
        let mut s = series("go", &[1, 2]);
        s.episodes[1].part_number = 1;
        s.episodes[1].id = "go-extra".to_string();

        let mut builder = CatalogBuilder::new();
        builder.register(s).unwrap();
        let err = builder.build().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicatePartNumber { part_number: 1, .. }
        ));
    }

    #[test]
    fn test_duplicate_episode_id_rejected() {
        let mut s = series("go", &[1, 2]);
        s.episodes[1].id = s.episodes[0].id.clone();

        let mut builder = CatalogBuilder::new();
        builder.register(s).unwrap();
        assert!(matches!(
            builder.build().unwrap_err(),
            CatalogError::DuplicateEpisodeId { .. }
        ));
    }

    #[test]
    fn test_zero_part_and_read_time_rejected() {
        let mut s = series("go", &[1]);
        s.episodes[0].part_number = 0;
        let mut builder = CatalogBuilder::new();
        builder.register(s).unwrap();
        assert!(matches!(
            builder.build().unwrap_err(),
            CatalogError::InvalidPartNumber { .. }
        ));

        let mut s = series("go", &[1]);
        s.episodes[0].read_time = 0;
        let mut builder = CatalogBuilder::new();
        builder.register(s).unwrap();
        assert!(matches!(
            builder.build().unwrap_err(),
            CatalogError::InvalidReadTime { .. }
        ));
    }

    #[test]
    fn test_missing_title_rejected() {
        let mut s = series("go", &[1]);
        s.title = "  ".to_string();
        let mut builder = CatalogBuilder::new();
        builder.register(s).unwrap();
        assert_eq!(
            builder.build().unwrap_err(),
            CatalogError::MissingField {
                series: "go".into(),
                field: "title".into()
            }
        );
    }

    #[test]
    fn test_drift_and_gaps_are_warnings() {
        let mut s = series("go", &[1, 3]);
        s.total_episodes = 10;

        let mut builder = CatalogBuilder::new();
        builder.register(s).unwrap();
        let catalog = builder.build().unwrap();

        assert!(catalog.warnings().contains(&CatalogWarning::TotalEpisodesDrift {
            series: "go".into(),
            declared: 10,
            authored: 2,
        }));
        assert!(catalog.warnings().contains(&CatalogWarning::NonContiguousParts {
            series: "go".into(),
            missing: 2,
        }));
    }

    #[test]
    fn test_unconventional_episode_id_is_warning() {
        let mut s = series("go", &[1]);
        s.episodes[0].id = "intro".to_string();

        let mut builder = CatalogBuilder::new();
        builder.register(s).unwrap();
        let catalog = builder.build().unwrap();
        assert!(matches!(
            catalog.warnings()[0],
            CatalogWarning::UnconventionalEpisodeId { .. }
        ));
    }

    #[test]
    fn test_builtin_content_is_valid() {
        let builder = CatalogBuilder::with_builtin().unwrap();
        assert!(!builder.is_empty());
        builder.build().unwrap();
    }
}
