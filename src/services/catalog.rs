use crate::models::{Candidate, ReferencePoint, VenueRecord};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading catalog fixtures
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory candidate and venue collections
///
/// Loaded once at startup and shared read-only between request handlers.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    candidates: Vec<Candidate>,
    venues: Vec<ReferencePoint>,
}

impl Catalog {
    pub fn new(candidates: Vec<Candidate>, venues: Vec<ReferencePoint>) -> Self {
        Self { candidates, venues }
    }

    /// Build a catalog from raw venue fixture rows
    pub fn from_records(candidates: Vec<Candidate>, venues: Vec<VenueRecord>) -> Self {
        let venues = venues
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_reference(index))
            .collect();

        Self { candidates, venues }
    }

    /// Load candidates and venues from JSON fixture files
    pub async fn load(
        candidates_path: impl AsRef<Path>,
        venues_path: impl AsRef<Path>,
    ) -> Result<Self, CatalogError> {
        let candidates: Vec<Candidate> = read_json(candidates_path.as_ref()).await?;
        let venues: Vec<VenueRecord> = read_json(venues_path.as_ref()).await?;

        let catalog = Self::from_records(candidates, venues);

        let unlocated = catalog.venues.iter().filter(|v| v.coordinate.is_none()).count();
        if unlocated > 0 {
            tracing::warn!("{} venues have no coordinates and will be ignored for distance", unlocated);
        }

        Ok(catalog)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn venues(&self) -> &[ReferencePoint] {
        &self.venues
    }

    /// Look up a candidate by area name, ignoring ASCII case
    pub fn find_area(&self, area: &str) -> Option<&Candidate> {
        self.candidates
            .iter()
            .find(|candidate| candidate.area.eq_ignore_ascii_case(area))
    }

    /// Distinct counties across all candidates, sorted
    pub fn counties(&self) -> Vec<String> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.county.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let display = path.display().to_string();

    let bytes = tokio::fs::read(path).await.map_err(|source| CatalogError::Io {
        path: display.clone(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
        path: display,
        source,
    })
}
