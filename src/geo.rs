// src/geo.rs

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters. Spherical approximation, adequate at city
/// scale.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A geographical point (WGS84 degrees).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new `GeoPoint`.
    ///
    /// # Panics
    /// Panics if latitude is not between -90 and 90, or longitude is not between -180 and 180.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        if !(-90.0..=90.0).contains(&latitude) {
            panic!("Latitude must be between -90 and 90 degrees.");
        }
        if !(-180.0..=180.0).contains(&longitude) {
            panic!("Longitude must be between -180 and 180 degrees.");
        }
        GeoPoint {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two points in meters, via the haversine
/// formula on a spherical Earth.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    EARTH_RADIUS_METERS * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Shortest distance in meters from `p` to the segment `a`-`b`.
///
/// Projects `p` onto the line through the segment in plain lat/lng space,
/// clamps the projection parameter to [0, 1], then measures the great-circle
/// distance to the clamped point. A degenerate segment (a == b) reduces to a
/// point distance.
pub fn distance_to_segment(p: GeoPoint, a: GeoPoint, b: GeoPoint) -> f64 {
    let (px, py) = (p.latitude, p.longitude);
    let (ax, ay) = (a.latitude, a.longitude);
    let (bx, by) = (b.latitude, b.longitude);

    let l2 = (ax - bx).powi(2) + (ay - by).powi(2);
    if l2 == 0.0 {
        return haversine_distance(p, a);
    }

    let t = (((px - ax) * (bx - ax) + (py - ay) * (by - ay)) / l2).clamp(0.0, 1.0);
    let nearest = GeoPoint {
        latitude: ax + t * (bx - ax),
        longitude: ay + t * (by - ay),
    };
    haversine_distance(p, nearest)
}
