// src/route.rs

use serde::{Deserialize, Serialize};

use crate::station::Station;

/// A service route between two stations.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: i64,
    pub origin_station: Station,
    pub destination_station: Station,
    pub base_price: f64,
    pub estimated_duration: i64,
    pub is_active: bool,
}

/// Payload for creating or updating a route (admin only). The backend
/// expects full station objects, not bare ids.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewRoute {
    pub origin_station: Station,
    pub destination_station: Station,
    pub base_price: f64,
    pub estimated_duration: i64,
    pub is_active: bool,
}

/// Destination stations reachable from `origin_id`, in catalog order.
pub fn destinations_from(routes: &[Route], origin_id: i64) -> Vec<&Station> {
    routes
        .iter()
        .filter(|r| r.origin_station.id == origin_id)
        .map(|r| &r.destination_station)
        .collect()
}

/// The route connecting `origin_id` to `destination_id`, if one is served.
pub fn find_route(routes: &[Route], origin_id: i64, destination_id: i64) -> Option<&Route> {
    routes
        .iter()
        .find(|r| r.origin_station.id == origin_id && r.destination_station.id == destination_id)
}
