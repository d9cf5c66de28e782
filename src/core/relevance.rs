use crate::models::{Attribute, Candidate};

/// Population density (per sq mi) mapped onto one point of the 0-10 scale
const POPULATION_PER_POINT: f64 = 1500.0;

const MAX_RELEVANCE: f64 = 10.0;

const FOOD_BUSINESS_TYPES: &[&str] = &["restaurant", "food", "dining", "pizza", "cafe"];
const COASTAL_TERMS: &[&str] = &["beach", "coastal", "waterfront"];
const COASTAL_AREA_TERMS: &[&str] = &["beach", "coast", "marina"];
const URBAN_TERMS: &[&str] = &["downtown", "urban", "city", "center"];
const URBAN_AREA_TERMS: &[&str] = &["downtown", "center", "city"];
const HILL_TERMS: &[&str] = &["hills", "hillside", "mountain"];
const HILL_AREA_TERMS: &[&str] = &["hills", "heights", "ridge"];
const DENSITY_TERMS: &[&str] = &["high", "dense", "busy", "crowded"];
const TRANSIT_TERMS: &[&str] = &[
    "transit",
    "transport",
    "metro",
    "bus",
    "rail",
    "subway",
    "accessible",
    "connectivity",
];
const QUALITY_TERMS: &[&str] = &["best", "top", "excellent", "great"];
const COMMERCIAL_TERMS: &[&str] = &["business", "commercial", "retail", "office", "store", "shop"];
const GENERIC_QUERIES: &[&str] = &["all", "show", "list", "find", "search", ""];
const FOOD_QUERY_TERMS: &[&str] = &["restaurant", "food", "dining", "pizza"];

#[inline]
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[inline]
fn mentions_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

/// First multiplier whose threshold `value` exceeds, else `fallback`
#[inline]
fn step_multiplier(value: f64, steps: &[(f64, f64)], fallback: f64) -> f64 {
    steps
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map_or(fallback, |(_, multiplier)| *multiplier)
}

/// Metric-only base score (0-10) from population density and transit access
pub fn metric_base_score(candidate: &Candidate) -> f64 {
    let population = candidate.attribute_or_zero(Attribute::PopulationDensity);
    let transport = candidate.attribute_or_zero(Attribute::TransportScore);

    let population_norm = (population / POPULATION_PER_POINT).clamp(0.0, MAX_RELEVANCE);
    let transport_norm = transport.clamp(0.0, MAX_RELEVANCE);

    round_tenths(0.6 * population_norm + 0.4 * transport_norm)
}

/// Keyword relevance (0-10) of a candidate for a free-text query
///
/// Only orders search results; inclusion is decided by the hard constraints.
/// Rules are checked in priority order and the first matching rule picks the
/// multiplier applied to [`metric_base_score`]:
/// 1. query names the area: x1.5
/// 2. food business types: by population density
/// 3. coastal, urban, hill, density, transit, quality and commercial keywords
/// 4. generic or empty queries: x1.0
/// 5. anything else: 0
pub fn query_relevance(query: &str, business_type: &str, candidate: &Candidate) -> f64 {
    let query = query.trim().to_lowercase();
    let business_type = business_type.trim().to_lowercase();
    let area = candidate.area.to_lowercase();

    let base = metric_base_score(candidate);
    let population = candidate.attribute_or_zero(Attribute::PopulationDensity);
    let businesses = candidate.attribute_or_zero(Attribute::BusinessDensity);
    let transport = candidate.attribute_or_zero(Attribute::TransportScore);

    let multiplier = if !query.is_empty() && area.contains(&query) {
        1.5
    } else if FOOD_BUSINESS_TYPES.contains(&business_type.as_str()) {
        step_multiplier(population, &[(8000.0, 1.3), (5000.0, 1.1)], 0.8)
    } else if mentions_any(&query, COASTAL_TERMS) {
        if mentions_any(&area, COASTAL_AREA_TERMS) { 1.4 } else { 0.3 }
    } else if mentions_any(&query, URBAN_TERMS) {
        if mentions_any(&area, URBAN_AREA_TERMS) {
            1.3
        } else {
            step_multiplier(population, &[(10000.0, 1.2)], 0.7)
        }
    } else if mentions_any(&query, HILL_TERMS) {
        if mentions_any(&area, HILL_AREA_TERMS) { 1.3 } else { 0.5 }
    } else if mentions_any(&query, DENSITY_TERMS) {
        step_multiplier(population, &[(10000.0, 1.4), (7000.0, 1.2)], 0.6)
    } else if mentions_any(&query, TRANSIT_TERMS) {
        step_multiplier(transport, &[(8.0, 1.5), (6.0, 1.3), (4.0, 1.1)], 0.5)
    } else if mentions_any(&query, QUALITY_TERMS) {
        step_multiplier(base, &[(7.0, 1.2), (5.0, 1.0)], 0.8)
    } else if mentions_any(&query, COMMERCIAL_TERMS) {
        step_multiplier(businesses, &[(80.0, 1.3), (60.0, 1.1)], 0.9)
    } else if GENERIC_QUERIES.contains(&query.as_str()) {
        1.0
    } else {
        0.0
    };

    round_tenths((base * multiplier).clamp(0.0, MAX_RELEVANCE))
}

/// Human-readable reasons drawn from a candidate's metrics
pub fn highlights(query: &str, candidate: &Candidate) -> Vec<String> {
    let query = query.trim().to_lowercase();
    let population = candidate.attribute_or_zero(Attribute::PopulationDensity);
    let businesses = candidate.attribute_or_zero(Attribute::BusinessDensity);
    let transport = candidate.attribute_or_zero(Attribute::TransportScore);

    let mut reasons = Vec::new();

    if !query.is_empty() && candidate.area.to_lowercase().contains(&query) {
        reasons.push(format!("Direct match for '{}'", query));
    }

    if population > 10000.0 {
        reasons.push("High population density - great for foot traffic".to_string());
    } else if population > 7000.0 {
        reasons.push("Good population density for business".to_string());
    }

    if businesses > 80.0 {
        reasons.push("High business density - established commercial area".to_string());
    } else if businesses > 60.0 {
        reasons.push("Moderate business density - growing commercial area".to_string());
    }

    if transport > 8.0 {
        reasons.push("Excellent public transportation access".to_string());
    } else if transport > 6.0 {
        reasons.push("Good public transportation connectivity".to_string());
    }

    if mentions_any(&query, FOOD_QUERY_TERMS) {
        if population > 8000.0 {
            reasons.push("High foot traffic ideal for restaurants".to_string());
        }
        if businesses > 70.0 {
            reasons.push("Established dining scene with competition".to_string());
        }
    }

    if reasons.is_empty() {
        reasons.push("Good business potential based on local metrics".to_string());
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_candidate(area: &str, population: f64, businesses: f64, transport: f64) -> Candidate {
        Candidate {
            area: area.to_string(),
            score: 0.0,
            coordinate: None,
            population_density: Some(population),
            business_density: Some(businesses),
            transport_score: Some(transport),
            apartment_count: None,
            reasons: vec![],
            county: None,
        }
    }

    #[test]
    fn test_metric_base_score() {
        // 0.6 * (9000 / 1500) + 0.4 * 7.0
        let candidate = create_candidate("Santa Monica", 9000.0, 85.0, 7.0);
        assert_eq!(metric_base_score(&candidate), 6.4);
    }

    #[test]
    fn test_metric_base_score_clamps() {
        let candidate = create_candidate("Downtown LA", 60000.0, 95.0, 14.0);
        assert_eq!(metric_base_score(&candidate), 10.0);
    }

    #[test]
    fn test_name_match_boost() {
        let candidate = create_candidate("Santa Monica", 9000.0, 85.0, 7.0);
        // 6.4 * 1.5 = 9.6
        assert_eq!(query_relevance("monica", "restaurant", &candidate), 9.6);
    }

    #[test]
    fn test_food_business_uses_population() {
        let dense = create_candidate("Koreatown", 9000.0, 85.0, 7.0);
        let sparse = create_candidate("Malibu", 3000.0, 20.0, 2.0);

        assert_eq!(query_relevance("tacos", "restaurant", &dense), 8.3);
        // 0.6 * 2 + 0.4 * 2 = 2.0, x0.8
        assert_eq!(query_relevance("tacos", "restaurant", &sparse), 1.6);
    }

    #[test]
    fn test_transit_keywords() {
        let candidate = create_candidate("Union Station", 6000.0, 50.0, 9.0);
        // 0.6 * 4 + 0.4 * 9 = 6.0, x1.5
        assert_eq!(query_relevance("near the metro", "retail", &candidate), 9.0);
    }

    #[test]
    fn test_coastal_keywords() {
        let beach = create_candidate("Manhattan Beach", 6000.0, 50.0, 4.0);
        let inland = create_candidate("Pomona", 6000.0, 50.0, 4.0);

        assert!(query_relevance("waterfront", "retail", &beach) > query_relevance("waterfront", "retail", &inland));
    }

    #[test]
    fn test_generic_and_unmatched_queries() {
        let candidate = create_candidate("Glendale", 6000.0, 50.0, 4.0);

        assert_eq!(query_relevance("", "retail", &candidate), metric_base_score(&candidate));
        assert_eq!(query_relevance("show", "retail", &candidate), metric_base_score(&candidate));
        assert_eq!(query_relevance("zzz", "retail", &candidate), 0.0);
    }

    #[test]
    fn test_highlights() {
        let candidate = create_candidate("Pasadena", 11000.0, 75.0, 8.5);
        let reasons = highlights("food", &candidate);

        assert!(reasons.contains(&"High population density - great for foot traffic".to_string()));
        assert!(reasons.contains(&"Moderate business density - growing commercial area".to_string()));
        assert!(reasons.contains(&"Excellent public transportation access".to_string()));
        assert!(reasons.contains(&"High foot traffic ideal for restaurants".to_string()));
        assert!(reasons.contains(&"Established dining scene with competition".to_string()));
    }

    #[test]
    fn test_highlights_fallback() {
        let candidate = create_candidate("Lancaster", 1000.0, 10.0, 2.0);
        assert_eq!(
            highlights("", &candidate),
            vec!["Good business potential based on local metrics".to_string()]
        );
    }
}
