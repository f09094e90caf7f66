// src/routing.rs

use serde::Deserialize;

use crate::geo::GeoPoint;
use crate::geofence::RoutePolyline;

const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    // GeoJSON LineString: [longitude, latitude] pairs.
    coordinates: Vec<[f64; 2]>,
}

/// Client for an OSRM-compatible routing service. Produces the road
/// polyline the geofence corridor is built from.
///
/// Routing is strictly best-effort: any failure (network, empty result,
/// malformed geometry) degrades to the two-point origin-destination
/// segment so the booking flow always has a usable corridor.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl Default for RoutingClient {
    fn default() -> Self {
        RoutingClient::new(DEFAULT_OSRM_URL)
    }
}

impl RoutingClient {
    pub fn new(base_url: &str) -> Self {
        RoutingClient {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the driving polyline from `origin` to `destination`, falling
    /// back to the straight two-point segment on any failure.
    pub async fn driving_route(&self, origin: GeoPoint, destination: GeoPoint) -> RoutePolyline {
        match self.try_driving_route(origin, destination).await {
            Ok(polyline) if !polyline.is_degenerate() => polyline,
            Ok(_) => {
                log::debug!("Routing service returned no usable geometry; using fallback segment");
                RoutePolyline::new(vec![origin, destination])
            }
            Err(e) => {
                log::warn!("Routing error: {}; using fallback segment", e);
                RoutePolyline::new(vec![origin, destination])
            }
        }
    }

    async fn try_driving_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RoutePolyline, reqwest::Error> {
        // OSRM takes lng,lat order on the wire.
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
            self.base_url,
            origin.longitude,
            origin.latitude,
            destination.longitude,
            destination.latitude
        );

        let response: OsrmResponse = self.http_client.get(&url).send().await?.json().await?;

        let points = response
            .routes
            .into_iter()
            .next()
            .map(|route| {
                route
                    .geometry
                    .coordinates
                    .into_iter()
                    .map(|[lng, lat]| GeoPoint {
                        latitude: lat,
                        longitude: lng,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(RoutePolyline::new(points))
    }
}
