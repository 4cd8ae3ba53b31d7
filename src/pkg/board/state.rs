use serde::Serialize;

use crate::{
    pkg::internal::{
        adaptors::jobs::{
            ordering::{sort, SortKey},
            selectors::{filter, Criteria},
            spec::{JobField, JobRecord},
            store::JobStore,
        },
        source::FileSource,
    },
    prelude::Result,
};

/// Label of the always-present "no constraint" choice.
pub const NO_CONSTRAINT: &str = "All";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FacetGroup {
    pub field: String,
    pub options: Vec<String>,
}

/// Choices offered for each filterable field.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Facets {
    pub groups: Vec<FacetGroup>,
}

impl Facets {
    pub fn options(&self, field: JobField) -> &[String] {
        self.groups
            .iter()
            .find(|group| group.field == field.as_str())
            .map(|group| group.options.as_slice())
            .unwrap_or_default()
    }
}

/// Session context owning the single job store.
#[derive(Debug, Default, Clone)]
pub struct AppState {
    store: JobStore,
}

impl AppState {
    pub fn new() -> Self {
        AppState::default()
    }

    pub fn store(&self) -> &JobStore {
        &self.store
    }

    /// Reads and parses the source, then swaps the store contents.
    pub async fn load(&mut self, source: &FileSource) -> Result<usize> {
        let text = source.read().await.inspect_err(|e| {
            tracing::warn!("could not read {}: {}", source.path().display(), e);
        })?;
        let count = self.load_text(&text)?;
        tracing::info!("loaded {} jobs from {}", count, source.path().display());
        Ok(count)
    }

    pub fn load_text(&mut self, text: &str) -> Result<usize> {
        self.store.load_json(text).inspect_err(|e| {
            tracing::warn!("rejected listing document, keeping {} jobs: {}", self.store.len(), e);
        })
    }

    /// Filters, then sorts, the stored jobs.
    pub fn view(&self, criteria: &Criteria, key: SortKey) -> Vec<&JobRecord> {
        sort(filter(self.store.records(), criteria), key)
    }

    pub fn facets(&self) -> Facets {
        Facets {
            groups: JobField::ALL
                .iter()
                .map(|field| FacetGroup {
                    field: field.to_string(),
                    options: self.store.distinct_values(*field),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::prelude::Error;

    const LISTINGS: &str = r#"[
        {"Title": "Platform Engineer", "Posted": "1 day", "Level": "Senior", "Type": "Remote", "Skill": "Rust"},
        {"Title": "Data Analyst", "Posted": "10 minute", "Level": "Junior", "Type": "Onsite", "Skill": "SQL"},
        {"Title": "API Developer", "Posted": "3 hour", "Level": "Senior", "Type": "Onsite", "Skill": "Rust"}
    ]"#;

    fn listing_file(name: &str, contents: &str) -> Result<std::path::PathBuf> {
        let path = std::env::temp_dir().join(format!("jobboard-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    #[tokio::test]
    #[traced_test]
    async fn test_load_from_file() -> Result<()> {
        let path = listing_file("load", LISTINGS)?;
        let mut state = AppState::new();
        assert_eq!(state.load(&FileSource::new(&path)).await?, 3);
        assert_eq!(state.store().len(), 3);
        std::fs::remove_file(path)?;
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn test_failed_loads_keep_prior_state() -> Result<()> {
        let mut state = AppState::new();
        state.load_text(LISTINGS)?;

        let path = listing_file("broken", "[{\"Title\": ")?;
        let err = state.load(&FileSource::new(&path)).await.unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
        std::fs::remove_file(path)?;

        let err = state
            .load(&FileSource::new("/no/such/dir/listings.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Read(_)));

        assert_eq!(state.store().len(), 3);
        assert!(logs_contain("keeping 3 jobs"));
        Ok(())
    }

    #[test]
    fn test_view_filters_before_sorting() -> Result<()> {
        let mut state = AppState::new();
        state.load_text(LISTINGS)?;
        let view = state.view(&Criteria::new().level("Senior"), SortKey::TitleAsc);
        let titles: Vec<&str> = view.iter().map(|job| job.title.as_str()).collect();
        assert_eq!(titles, vec!["API Developer", "Platform Engineer"]);

        let all = state.view(&Criteria::new(), SortKey::Unsorted);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].title, "Platform Engineer");
        assert_eq!(state.store().records()[0].title, "Platform Engineer");
        Ok(())
    }

    #[test]
    fn test_view_of_empty_state() {
        let state = AppState::new();
        assert!(state.view(&Criteria::new(), SortKey::PostedDesc).is_empty());
    }

    #[test]
    fn test_facets_follow_store() -> Result<()> {
        let mut state = AppState::new();
        state.load_text(LISTINGS)?;
        let facets = state.facets();
        assert_eq!(facets.options(JobField::Level), ["Senior", "Junior"]);
        assert_eq!(facets.options(JobField::Type), ["Remote", "Onsite"]);
        assert_eq!(facets.options(JobField::Skill), ["Rust", "SQL"]);
        Ok(())
    }
}
