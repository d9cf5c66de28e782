use serde::{Deserialize, Serialize};

use crate::models::domain::{Candidate, Coordinate, Proximity, ReferencePoint, ScoredCandidate};

/// Response for the advanced search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub request_id: uuid::Uuid,
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
    pub excluded: usize,
    pub message: String,
}

/// Response for the shading endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShadeResponse {
    pub request_id: uuid::Uuid,
    pub candidates: Vec<ScoredCandidate>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountiesResponse {
    pub counties: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenuesResponse {
    pub venues: Vec<ReferencePoint>,
}

/// Catalog entry as listed for map display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaSummary {
    pub area: String,
    pub coordinates: Option<Coordinate>,
    pub county: Option<String>,
}

impl From<&Candidate> for AreaSummary {
    fn from(candidate: &Candidate) -> Self {
        Self {
            area: candidate.area.clone(),
            coordinates: candidate.coordinate,
            county: candidate.county.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreasResponse {
    pub areas: Vec<AreaSummary>,
    pub total: usize,
}

/// Metrics and nearest venue for a single catalog area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDetailsResponse {
    pub candidate: Candidate,
    /// Metric-only score (0-10) from population density and transit access
    pub metric_score: f64,
    pub proximity: Proximity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametersResponse {
    pub parameters: Vec<ParameterInfo>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
