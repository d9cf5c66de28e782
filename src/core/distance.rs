use crate::models::{BoundingBox, Coordinate, Proximity, ReferencePoint};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres per statute mile
const KM_PER_MILE: f64 = 1.609344;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two coordinates in kilometers
#[inline]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Find the closest reference point to a coordinate
///
/// Linear scan over every reference that has a coordinate. Ties keep the
/// earliest reference in the slice.
///
/// # Returns
/// `None` when `coordinate` is absent or no reference is locatable
pub fn nearest_reference(
    coordinate: Option<Coordinate>,
    references: &[ReferencePoint],
) -> Option<(&ReferencePoint, f64)> {
    let origin = coordinate?;
    let mut nearest: Option<(&ReferencePoint, f64)> = None;

    for reference in references {
        let Some(position) = reference.coordinate else {
            continue;
        };
        let km = distance(origin, position);

        match nearest {
            Some((_, best)) if km >= best => {}
            _ => nearest = Some((reference, km)),
        }
    }

    nearest
}

/// Resolve the nearest-venue outcome for a candidate coordinate
pub fn resolve_proximity(
    coordinate: Option<Coordinate>,
    references: &[ReferencePoint],
) -> Proximity {
    if coordinate.is_none() {
        return Proximity::NoLocation;
    }

    match nearest_reference(coordinate, references) {
        Some((venue, distance_km)) => Proximity::Resolved {
            venue: venue.clone(),
            distance_km,
        },
        None => Proximity::NoReferences,
    }
}

#[inline]
pub fn miles_to_km(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

#[inline]
pub fn km_to_miles(km: f64) -> f64 {
    km / KM_PER_MILE
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(coordinate: Coordinate, bbox: &BoundingBox) -> bool {
    coordinate.latitude >= bbox.min_lat
        && coordinate.latitude <= bbox.max_lat
        && coordinate.longitude >= bbox.min_lon
        && coordinate.longitude <= bbox.max_lon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: &str, lat: f64, lon: f64) -> ReferencePoint {
        ReferencePoint {
            id: id.to_string(),
            coordinate: Some(Coordinate::new(lat, lon)),
            category: "Baseball".to_string(),
            name: format!("Venue {}", id),
        }
    }

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let distance = haversine_distance(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_on_self() {
        let dodger = Coordinate::new(34.0739, -118.2400);
        let angel = Coordinate::new(33.8003, -117.8827);

        assert_eq!(distance(dodger, dodger), 0.0);
        assert!((distance(dodger, angel) - distance(angel, dodger)).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_reference_picks_minimum() {
        let references = vec![
            venue("far", 34.5, -118.2),
            venue("near", 34.01, -118.2),
            venue("mid", 34.2, -118.2),
        ];

        let (nearest, km) = nearest_reference(Some(Coordinate::new(34.0, -118.2)), &references).unwrap();
        assert_eq!(nearest.id, "near");
        assert!(km > 1.0 && km < 1.2, "expected ~1.1km, got {}", km);
    }

    #[test]
    fn test_nearest_reference_ties_keep_first() {
        let references = vec![venue("first", 34.1, -118.0), venue("second", 34.1, -118.0)];

        let (nearest, _) = nearest_reference(Some(Coordinate::new(34.0, -118.0)), &references).unwrap();
        assert_eq!(nearest.id, "first");
    }

    #[test]
    fn test_nearest_reference_skips_unlocated_references() {
        let mut unlocated = venue("unlocated", 0.0, 0.0);
        unlocated.coordinate = None;
        let references = vec![unlocated, venue("located", 35.0, -118.0)];

        let (nearest, _) = nearest_reference(Some(Coordinate::new(34.0, -118.0)), &references).unwrap();
        assert_eq!(nearest.id, "located");
    }

    #[test]
    fn test_resolve_proximity_outcomes() {
        let references = vec![venue("a", 34.0, -118.0)];

        assert_eq!(resolve_proximity(None, &references), Proximity::NoLocation);
        assert_eq!(
            resolve_proximity(Some(Coordinate::new(34.0, -118.0)), &[]),
            Proximity::NoReferences
        );

        let resolved = resolve_proximity(Some(Coordinate::new(34.0, -118.0)), &references);
        assert_eq!(resolved.venue().map(|v| v.id.as_str()), Some("a"));
        assert_eq!(resolved.distance_km(), Some(0.0));
    }

    #[test]
    fn test_mile_conversion() {
        assert!((miles_to_km(5.0) - 8.04672).abs() < 1e-9);
        assert!((km_to_miles(miles_to_km(7.2)) - 7.2).abs() < 1e-9);
    }

    #[test]
    fn test_point_within_bbox() {
        let bbox = BoundingBox {
            min_lat: 33.5,
            max_lat: 34.5,
            min_lon: -118.5,
            max_lon: -117.5,
        };

        assert!(is_within_bounding_box(Coordinate::new(34.0, -118.0), &bbox));
        // Edges are inclusive
        assert!(is_within_bounding_box(Coordinate::new(34.5, -117.5), &bbox));
        assert!(!is_within_bounding_box(Coordinate::new(40.0, -118.0), &bbox));
    }
}
