// src/geofence.rs

use serde::{Deserialize, Serialize};

use crate::error::VanError;
use crate::geo::{distance_to_segment, GeoPoint};

/// Maximum distance in meters a custom pickup/dropoff pin may sit from the
/// active route. The backend enforces nothing here; the 500 m corridor is a
/// client-side rule.
pub const PIN_RADIUS_METERS: f64 = 500.0;

/// An ordered sequence of points approximating a driving path. Produced by a
/// routing service and treated as read-only; may hold fewer than two points
/// when the routing fetch failed or has not run yet.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct RoutePolyline(Vec<GeoPoint>);

impl RoutePolyline {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        RoutePolyline(points)
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A polyline with fewer than two points has no usable segment.
    pub fn is_degenerate(&self) -> bool {
        self.0.len() < 2
    }
}

impl From<Vec<GeoPoint>> for RoutePolyline {
    fn from(points: Vec<GeoPoint>) -> Self {
        RoutePolyline(points)
    }
}

/// Outcome of a geofence check. The caller displays the pin or the error;
/// the check itself has no side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accepted(GeoPoint),
    Rejected {
        distance_meters: f64,
        threshold_meters: u32,
    },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

/// The corridor around the active route inside which custom pins are
/// accepted. Origin and destination station coordinates double as the
/// fallback segment when the polyline is degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct Corridor {
    origin: GeoPoint,
    destination: GeoPoint,
    polyline: RoutePolyline,
}

impl Corridor {
    pub fn new(origin: GeoPoint, destination: GeoPoint, polyline: RoutePolyline) -> Self {
        Corridor {
            origin,
            destination,
            polyline,
        }
    }

    /// Corridor with no routed polyline; every check runs against the
    /// synthetic origin-destination segment.
    pub fn fallback(origin: GeoPoint, destination: GeoPoint) -> Self {
        Corridor::new(origin, destination, RoutePolyline::default())
    }

    pub fn polyline(&self) -> &RoutePolyline {
        &self.polyline
    }

    /// Minimum distance in meters from `candidate` to any consecutive
    /// segment of the route, or to the fallback segment when the polyline
    /// is degenerate.
    pub fn min_distance_to(&self, candidate: GeoPoint) -> f64 {
        let points = self.polyline.points();
        if points.len() > 1 {
            points
                .windows(2)
                .map(|seg| distance_to_segment(candidate, seg[0], seg[1]))
                .fold(f64::INFINITY, f64::min)
        } else {
            distance_to_segment(candidate, self.origin, self.destination)
        }
    }

    /// Decides whether `candidate` is an acceptable pin for this route.
    pub fn check(&self, candidate: GeoPoint) -> Verdict {
        let distance = self.min_distance_to(candidate);
        if distance <= PIN_RADIUS_METERS {
            Verdict::Accepted(candidate)
        } else {
            Verdict::Rejected {
                distance_meters: distance,
                threshold_meters: PIN_RADIUS_METERS as u32,
            }
        }
    }

    /// Like [`Corridor::check`], but surfaces rejection as
    /// [`VanError::OutOfGeofence`].
    pub fn validate(&self, candidate: GeoPoint) -> Result<GeoPoint, VanError> {
        match self.check(candidate) {
            Verdict::Accepted(point) => Ok(point),
            Verdict::Rejected {
                threshold_meters, ..
            } => Err(VanError::OutOfGeofence { threshold_meters }),
        }
    }
}
