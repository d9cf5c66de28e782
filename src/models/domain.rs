use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;

/// Geographic position in degrees
///
/// On the wire a coordinate is always a `[longitude, latitude]` pair, the
/// same order GeoJSON uses. Conversion happens here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.longitude, coordinate.latitude]
    }
}

/// Scored candidate attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    PopulationDensity,
    BusinessDensity,
    TransportScore,
    ApartmentCount,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::PopulationDensity,
        Attribute::BusinessDensity,
        Attribute::TransportScore,
        Attribute::ApartmentCount,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Attribute::PopulationDensity => "population_density",
            Attribute::BusinessDensity => "business_density",
            Attribute::TransportScore => "transport_score",
            Attribute::ApartmentCount => "apartment_count",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Attribute::PopulationDensity => "Number of people per square mile",
            Attribute::BusinessDensity => "Number of existing businesses in area",
            Attribute::TransportScore => "Public transportation accessibility (0-10)",
            Attribute::ApartmentCount => "Number of apartment buildings in area",
        }
    }
}

/// Fixed point of interest (event venue) candidates are measured against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub id: String,
    #[serde(rename = "coordinates", default)]
    pub coordinate: Option<Coordinate>,
    pub category: String,
    pub name: String,
}

/// Venue record as it appears in the static fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueRecord {
    #[serde(rename = "Latitude", default)]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", default)]
    pub longitude: Option<f64>,
    #[serde(rename = "Sport", default)]
    pub sport: String,
    #[serde(rename = "Location", default)]
    pub location: String,
}

impl VenueRecord {
    /// Convert a fixture row into a reference point, using its position in
    /// the fixture as the identifier.
    pub fn into_reference(self, index: usize) -> ReferencePoint {
        let coordinate = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        };

        ReferencePoint {
            id: format!("venue-{}", index),
            coordinate,
            category: self.sport,
            name: self.location,
        }
    }
}

/// Business location produced by the recommendation provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub area: String,
    /// Provider-assigned score, unrelated to the aggregate preference score
    #[serde(default)]
    pub score: f64,
    #[serde(rename = "coordinates", default)]
    pub coordinate: Option<Coordinate>,
    #[serde(default)]
    pub population_density: Option<f64>,
    #[serde(default)]
    pub business_density: Option<f64>,
    #[serde(default)]
    pub transport_score: Option<f64>,
    #[serde(default)]
    pub apartment_count: Option<f64>,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub county: Option<String>,
}

impl Candidate {
    pub fn attribute(&self, attribute: Attribute) -> Option<f64> {
        match attribute {
            Attribute::PopulationDensity => self.population_density,
            Attribute::BusinessDensity => self.business_density,
            Attribute::TransportScore => self.transport_score,
            Attribute::ApartmentCount => self.apartment_count,
        }
    }

    /// Attribute value with a missing measurement read as zero
    #[inline]
    pub fn attribute_or_zero(&self, attribute: Attribute) -> f64 {
        self.attribute(attribute).unwrap_or(0.0)
    }
}

/// Optional `[min, max]` preference range
///
/// An unset end is `None`; a bound is only set by deliberate user action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl Bound {
    pub const UNSET: Bound = Bound { min: None, max: None };

    pub const fn at_most(max: f64) -> Self {
        Self { min: None, max: Some(max) }
    }

    pub const fn at_least(min: f64) -> Self {
        Self { min: Some(min), max: None }
    }

    pub const fn between(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Build a kilometre radius bound from mile-denominated slider values
    pub fn from_miles(min: Option<f64>, max: Option<f64>) -> Self {
        use crate::core::distance::miles_to_km;

        Self {
            min: min.map(miles_to_km),
            max: max.map(miles_to_km),
        }
    }

    pub fn is_set(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Inclusive containment; an unset end never excludes
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    fn validate(&self, field: &'static str) -> Result<(), EngineError> {
        for value in [self.min, self.max].into_iter().flatten() {
            if !value.is_finite() {
                return Err(EngineError::NonFiniteBound { field });
            }
            if value < 0.0 {
                return Err(EngineError::NegativeBound { field, value });
            }
        }

        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(EngineError::InvertedBound { field, min, max });
            }
        }

        Ok(())
    }
}

/// Geospatial bounding box, inclusive on every edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(rename = "south")]
    pub min_lat: f64,
    #[serde(rename = "north")]
    pub max_lat: f64,
    #[serde(rename = "west")]
    pub min_lon: f64,
    #[serde(rename = "east")]
    pub max_lon: f64,
}

/// User filter specification shared by the shading and search paths
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub population_density: Bound,
    pub business_density: Bound,
    pub transport_score: Bound,
    pub apartment_count: Bound,
    /// Distance to the nearest venue, in kilometres
    pub radius_km: Bound,
    pub query: String,
    pub counties: Vec<String>,
    pub map_bounds: Option<BoundingBox>,
}

impl FilterSpec {
    pub fn bound(&self, attribute: Attribute) -> &Bound {
        match attribute {
            Attribute::PopulationDensity => &self.population_density,
            Attribute::BusinessDensity => &self.business_density,
            Attribute::TransportScore => &self.transport_score,
            Attribute::ApartmentCount => &self.apartment_count,
        }
    }

    /// Reject specs no candidate could be meaningfully measured against
    pub fn validate(&self) -> Result<(), EngineError> {
        for attribute in Attribute::ALL {
            self.bound(attribute).validate(attribute.name())?;
        }
        self.radius_km.validate("radius_km")?;

        if let Some(bbox) = &self.map_bounds {
            let edges = [bbox.min_lat, bbox.max_lat, bbox.min_lon, bbox.max_lon];
            if edges.iter().any(|edge| !edge.is_finite()) {
                return Err(EngineError::NonFiniteBound { field: "map_bounds" });
            }
            if bbox.min_lat > bbox.max_lat || bbox.min_lon > bbox.max_lon {
                return Err(EngineError::InvertedMapBounds);
            }
        }

        Ok(())
    }
}

/// Outcome of the nearest-venue lookup for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Proximity {
    Resolved {
        venue: ReferencePoint,
        distance_km: f64,
    },
    /// The candidate has no coordinate
    NoLocation,
    /// No venue carries a coordinate
    NoReferences,
}

impl Proximity {
    pub fn venue(&self) -> Option<&ReferencePoint> {
        match self {
            Proximity::Resolved { venue, .. } => Some(venue),
            Proximity::NoLocation | Proximity::NoReferences => None,
        }
    }

    pub fn distance_km(&self) -> Option<f64> {
        match self {
            Proximity::Resolved { distance_km, .. } => Some(*distance_km),
            Proximity::NoLocation | Proximity::NoReferences => None,
        }
    }
}

/// Population-relative shading bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Dark,
    Medium,
    Faint,
}

/// Candidate with its derived, per-filter scoring data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub proximity: Proximity,
    pub aggregate_score: f64,
    pub tier: Tier,
    /// Keyword relevance, only computed on the search path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

impl ScoredCandidate {
    pub fn nearest_venue(&self) -> Option<&ReferencePoint> {
        self.proximity.venue()
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.proximity.distance_km()
    }
}
