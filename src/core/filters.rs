use crate::core::distance::{is_within_bounding_box, resolve_proximity};
use crate::core::error::EngineError;
use crate::models::{Attribute, Bound, Candidate, FilterSpec, Proximity, ReferencePoint};

/// Check every set attribute bound
///
/// A missing attribute is read as 0, the same value the scorer uses.
#[inline]
pub fn passes_attribute_bounds(candidate: &Candidate, spec: &FilterSpec) -> bool {
    Attribute::ALL
        .iter()
        .all(|&attribute| spec.bound(attribute).contains(candidate.attribute_or_zero(attribute)))
}

/// Check the distance-to-nearest-venue bound
///
/// Candidates without a resolved venue fail as soon as either end of the
/// radius is set.
#[inline]
pub fn passes_radius(proximity: &Proximity, radius_km: &Bound) -> bool {
    if !radius_km.is_set() {
        return true;
    }

    match proximity {
        Proximity::Resolved { distance_km, .. } => radius_km.contains(*distance_km),
        Proximity::NoLocation | Proximity::NoReferences => false,
    }
}

/// Check the county allow-list; an empty list allows everything
#[inline]
pub fn matches_counties(candidate: &Candidate, counties: &[String]) -> bool {
    if counties.is_empty() {
        return true;
    }

    candidate
        .county
        .as_ref()
        .is_some_and(|county| counties.iter().any(|allowed| allowed.eq_ignore_ascii_case(county)))
}

#[inline]
fn within_map_bounds(candidate: &Candidate, spec: &FilterSpec) -> bool {
    match (&spec.map_bounds, candidate.coordinate) {
        (None, _) => true,
        (Some(bbox), Some(coordinate)) => is_within_bounding_box(coordinate, bbox),
        (Some(_), None) => false,
    }
}

/// Strict inclusion check for the authoritative search path
///
/// Assumes `spec` has already been validated.
pub fn passes_hard_constraints(candidate: &Candidate, proximity: &Proximity, spec: &FilterSpec) -> bool {
    matches_counties(candidate, &spec.counties)
        && passes_attribute_bounds(candidate, spec)
        && within_map_bounds(candidate, spec)
        && passes_radius(proximity, &spec.radius_km)
}

/// Validate `spec` and return the candidates that satisfy every hard bound
pub fn apply_hard_constraints(
    candidates: &[Candidate],
    references: &[ReferencePoint],
    spec: &FilterSpec,
) -> Result<Vec<Candidate>, EngineError> {
    spec.validate()?;

    Ok(candidates
        .iter()
        .filter(|candidate| {
            let proximity = resolve_proximity(candidate.coordinate, references);
            passes_hard_constraints(candidate, &proximity, spec)
        })
        .cloned()
        .collect())
}
