use crate::core::distance::resolve_proximity;
use crate::models::{Attribute, Bound, Candidate, FilterSpec, Proximity, ReferencePoint};

/// Score returned when a bound expresses no preference
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Fraction of `max` treated as "close enough" for an at-most bound
const MAX_TOLERANCE_RATIO: f64 = 0.2;

/// Fraction of `min` accepted around a zero-width `[min, max]` range
const DEGENERATE_TOLERANCE_RATIO: f64 = 0.1;

const IN_RANGE_BONUS: f64 = 0.2;

/// Derived scoring data for a single candidate
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore {
    pub proximity: Proximity,
    pub aggregate_score: f64,
}

/// Soft preference score (0-1) of one attribute value against a bound
///
/// Scoring shape:
/// - no bounds: neutral 0.5
/// - only `max`: peaks near `max` (0.7-1.0 within 20% of it), 0.4-0.7 below,
///   decaying to 0 above
/// - only `min`: `value / min`, saturating at 1
/// - both: center-seeking, `1 - |value - center| / half_range`, plus a 0.2
///   bonus (capped at 1) inside `[min, max]`
pub fn range_score(value: f64, bound: &Bound) -> f64 {
    match (bound.min, bound.max) {
        (None, None) => NEUTRAL_SCORE,
        (None, Some(max)) => at_most_score(value, max),
        (Some(min), None) => at_least_score(value, min),
        (Some(min), Some(max)) => centered_score(value, min, max),
    }
}

#[inline]
fn at_most_score(value: f64, max: f64) -> f64 {
    let tolerance = MAX_TOLERANCE_RATIO * max;

    // Zero or subnormal max: the tolerance band collapses to the point itself
    if tolerance == 0.0 {
        return if value == max { 1.0 } else { 0.0 };
    }

    let deviation = (value - max).abs();

    if deviation <= tolerance {
        1.0 - (deviation / tolerance) * 0.3
    } else if value <= max {
        (0.4 + (value / max) * 0.3).max(0.0)
    } else {
        (0.4 - ((value - max) / max) * 0.4).max(0.0)
    }
}

#[inline]
fn at_least_score(value: f64, min: f64) -> f64 {
    if min == 0.0 {
        return if value >= 0.0 { 1.0 } else { 0.0 };
    }

    (value / min).clamp(0.0, 1.0)
}

#[inline]
fn centered_score(value: f64, min: f64, max: f64) -> f64 {
    let half_range = (max - min) / 2.0;

    if half_range == 0.0 {
        let within = (value - min).abs() <= DEGENERATE_TOLERANCE_RATIO * min;
        return if within { 1.0 } else { 0.0 };
    }

    let center = (min + max) / 2.0;
    let base = (1.0 - (value - center).abs() / half_range).max(0.0);

    if value >= min && value <= max {
        (base + IN_RANGE_BONUS).min(1.0)
    } else {
        base
    }
}

/// Sum of the per-attribute range scores (0-4)
///
/// A missing attribute is scored as the value 0.
pub fn aggregate_score(candidate: &Candidate, spec: &FilterSpec) -> f64 {
    Attribute::ALL
        .iter()
        .map(|&attribute| range_score(candidate.attribute_or_zero(attribute), spec.bound(attribute)))
        .sum()
}

/// Resolve proximity and aggregate score for a candidate
pub fn score_candidate(
    candidate: &Candidate,
    references: &[ReferencePoint],
    spec: &FilterSpec,
) -> CandidateScore {
    CandidateScore {
        proximity: resolve_proximity(candidate.coordinate, references),
        aggregate_score: aggregate_score(candidate, spec),
    }
}
