// Core algorithm exports
pub mod distance;
pub mod engine;
pub mod error;
pub mod filters;
pub mod relevance;
pub mod scoring;
pub mod tiers;

pub use distance::{distance, haversine_distance, km_to_miles, miles_to_km, nearest_reference, resolve_proximity};
pub use engine::{Recommender, SearchResult, DEFAULT_MAX_RESULTS};
pub use error::EngineError;
pub use filters::{apply_hard_constraints, passes_attribute_bounds, passes_hard_constraints, passes_radius};
pub use relevance::{highlights, metric_base_score, query_relevance};
pub use scoring::{aggregate_score, range_score, score_candidate, CandidateScore};
pub use tiers::{classify, tier_thresholds, TierThresholds};
