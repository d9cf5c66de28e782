// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Attribute, Bound, BoundingBox, Candidate, Coordinate, FilterSpec, Proximity, ReferencePoint,
    ScoredCandidate, Tier, VenueRecord,
};
pub use requests::{AdvancedSearchRequest, ShadeRequest};
pub use responses::{
    AreaSummary, AreasResponse, CountiesResponse, ErrorResponse, HealthResponse,
    LocationDetailsResponse, ParameterInfo, ParametersResponse, SearchResponse, ShadeResponse,
    VenuesResponse,
};
