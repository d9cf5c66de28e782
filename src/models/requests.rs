use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Candidate, FilterSpec};

/// Request for the authoritative search over the catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdvancedSearchRequest {
    #[serde(default)]
    pub filters: FilterSpec,
    #[validate(length(min = 1, max = 64))]
    #[serde(default = "default_business_type")]
    pub business_type: String,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

fn default_business_type() -> String {
    "restaurant".to_string()
}

/// Request to re-shade the candidates currently shown on the map
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShadeRequest {
    #[validate(length(max = 500))]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub filters: FilterSpec,
}
