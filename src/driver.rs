// src/driver.rs

use reqwest::Method;

use crate::booking::Booking;
use crate::error::VanError;
use crate::schedule::DriverSchedule;
use crate::EasyVan;

/// Driver-side operations: assigned departures, the passenger manifest for
/// a departure, and pickup check-in. Obtained via [`EasyVan::driver`]; all
/// endpoints require a driver session.
pub struct DriverHandle<'a> {
    client: &'a EasyVan,
}

impl<'a> DriverHandle<'a> {
    pub fn new(client: &'a EasyVan) -> Self {
        DriverHandle { client }
    }

    /// Departures assigned to a driver, each with its passenger headcount.
    pub async fn schedules(&self, driver_id: i64) -> Result<Vec<DriverSchedule>, VanError> {
        let endpoint = format!("driver/schedules/{}", driver_id);
        self.client
            ._request(Method::GET, &endpoint, None::<&()>, true, None)
            .await
    }

    /// The passenger manifest for one departure: every booking with its
    /// seat, pickup point, and contact phone.
    pub async fn manifest(&self, schedule_id: i64) -> Result<Vec<Booking>, VanError> {
        let endpoint = format!("driver/schedules/{}/bookings", schedule_id);
        self.client
            ._request(Method::GET, &endpoint, None::<&()>, true, None)
            .await
    }

    /// Marks a passenger as picked up.
    pub async fn verify_pickup(&self, booking_id: i64) -> Result<(), VanError> {
        let endpoint = format!("driver/verify-pickup/{}", booking_id);
        self.client
            ._request_text(Method::POST, &endpoint, None::<&()>, true)
            .await?;
        Ok(())
    }
}
