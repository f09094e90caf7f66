// src/admin.rs

use reqwest::Method;

use crate::error::VanError;
use crate::route::{NewRoute, Route};
use crate::schedule::{NewSchedule, Schedule, Vehicle};
use crate::station::{NewStation, Station};
use crate::user::{NewDriver, User};
use crate::EasyVan;

/// Administrative operations on stations, routes, schedules, and driver
/// accounts. Obtained via [`EasyVan::admin`]; every endpoint requires an
/// admin session and fails with an authentication error otherwise.
pub struct AdminHandle<'a> {
    client: &'a EasyVan,
}

impl<'a> AdminHandle<'a> {
    pub fn new(client: &'a EasyVan) -> Self {
        AdminHandle { client }
    }

    // Stations

    pub async fn create_station(&self, station: &NewStation) -> Result<Station, VanError> {
        self.client
            ._request(Method::POST, "admin/stations", Some(station), true, None)
            .await
    }

    pub async fn update_station(
        &self,
        station_id: i64,
        station: &NewStation,
    ) -> Result<Station, VanError> {
        let endpoint = format!("admin/stations/{}", station_id);
        self.client
            ._request(Method::PUT, &endpoint, Some(station), true, None)
            .await
    }

    /// Deletes a station. Fails server-side while routes still reference it.
    pub async fn delete_station(&self, station_id: i64) -> Result<(), VanError> {
        let endpoint = format!("admin/stations/{}", station_id);
        self.client
            ._request_text(Method::DELETE, &endpoint, None::<&()>, true)
            .await?;
        Ok(())
    }

    // Routes

    pub async fn create_route(&self, route: &NewRoute) -> Result<Route, VanError> {
        self.client
            ._request(Method::POST, "admin/routes", Some(route), true, None)
            .await
    }

    pub async fn update_route(&self, route_id: i64, route: &NewRoute) -> Result<Route, VanError> {
        let endpoint = format!("admin/routes/{}", route_id);
        self.client
            ._request(Method::PUT, &endpoint, Some(route), true, None)
            .await
    }

    pub async fn delete_route(&self, route_id: i64) -> Result<(), VanError> {
        let endpoint = format!("admin/routes/{}", route_id);
        self.client
            ._request_text(Method::DELETE, &endpoint, None::<&()>, true)
            .await?;
        Ok(())
    }

    // Schedules

    /// Assigns a driver and vehicle to a departure.
    pub async fn create_schedule(&self, schedule: &NewSchedule) -> Result<Schedule, VanError> {
        self.client
            ._request(Method::POST, "admin/schedules", Some(schedule), true, None)
            .await
    }

    pub async fn delete_schedule(&self, schedule_id: i64) -> Result<(), VanError> {
        let endpoint = format!("admin/schedules/{}", schedule_id);
        self.client
            ._request_text(Method::DELETE, &endpoint, None::<&()>, true)
            .await?;
        Ok(())
    }

    // Driver accounts

    pub async fn drivers(&self) -> Result<Vec<User>, VanError> {
        self.client
            ._request(Method::GET, "admin/drivers", None::<&()>, true, None)
            .await
    }

    pub async fn create_driver(&self, driver: &NewDriver) -> Result<User, VanError> {
        self.client
            ._request(Method::POST, "admin/drivers", Some(driver), true, None)
            .await
    }

    pub async fn update_driver(&self, driver_id: i64, driver: &NewDriver) -> Result<User, VanError> {
        let endpoint = format!("admin/drivers/{}", driver_id);
        self.client
            ._request(Method::PUT, &endpoint, Some(driver), true, None)
            .await
    }

    pub async fn delete_driver(&self, driver_id: i64) -> Result<(), VanError> {
        let endpoint = format!("admin/drivers/{}", driver_id);
        self.client
            ._request_text(Method::DELETE, &endpoint, None::<&()>, true)
            .await?;
        Ok(())
    }

    // Fleet

    pub async fn vehicles(&self) -> Result<Vec<Vehicle>, VanError> {
        self.client
            ._request(Method::GET, "admin/vehicles", None::<&()>, true, None)
            .await
    }
}
