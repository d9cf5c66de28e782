//! Scout Algo - venue-proximity scoring for business location scouting
//!
//! This library provides the scoring and filtering engine behind the location
//! scouting map. Candidate business locations are measured against fixed
//! event venues, soft-scored against a user's attribute bounds, shaded into
//! three population-relative tiers, and strictly filtered for the
//! authoritative search.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Recommender, EngineError, distance::{haversine_distance, nearest_reference}};
pub use models::{Bound, Candidate, Coordinate, FilterSpec, Proximity, ReferencePoint, ScoredCandidate, Tier};
