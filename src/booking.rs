// src/booking.rs

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::VanError;
use crate::schedule::Schedule;
use crate::user::User;

/// Lifecycle of a booking as reported by the backend. `Unknown` absorbs
/// statuses added server-side before the SDK learns about them.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Paid,
    Confirmed,
    Cancelled,
    PickedUp,
    #[serde(other)]
    Unknown,
}

/// A reserved seat on a departure.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub schedule: Schedule,
    pub seat_number: u8,
    pub pickup_point: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub status: BookingStatus,
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// Reservation payload for `POST /api/bookings/reserve`. Field names match
/// the backend's `BookingRequest` DTO.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub route_id: i64,
    pub departure_time: NaiveDateTime,
    pub user_id: i64,
    pub seat_number: u8,
    pub pickup_point: String,
    pub pickup_lat: Option<f64>,
    pub pickup_lng: Option<f64>,
    pub dropoff_point: String,
    pub dropoff_lat: Option<f64>,
    pub dropoff_lng: Option<f64>,
    pub contact_phone: String,
    pub remark: String,
    pub total_price: f64,
}

/// Typed form of the backend's plain-text reservation receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationReceipt {
    pub booking_id: i64,
}

// Success bodies look like "จองสำเร็จ:42"; anything else is a rejection
// (seat conflict, closed schedule) phrased for the end user.
pub(crate) fn parse_reservation_receipt(body: &str) -> Result<ReservationReceipt, VanError> {
    match body.trim().split_once(':') {
        Some((prefix, id)) if prefix == "จองสำเร็จ" => {
            let booking_id = id.trim().parse::<i64>().map_err(|_| {
                VanError::UnexpectedResponse(format!("unparsable booking id in receipt: {}", body))
            })?;
            Ok(ReservationReceipt { booking_id })
        }
        _ => Err(VanError::ApiError {
            status: 200,
            message: body.trim().to_string(),
        }),
    }
}

/// Provides seat reservation and booking management for the logged-in
/// passenger. Obtained via [`crate::EasyVan::bookings`].
pub struct BookingHandle<'a> {
    client: &'a crate::EasyVan,
}

impl<'a> BookingHandle<'a> {
    pub fn new(client: &'a crate::EasyVan) -> Self {
        BookingHandle { client }
    }

    /// Reserves a seat. The backend answers with a plain-text receipt that
    /// is parsed into a [`ReservationReceipt`]; a conflict (seat already
    /// taken) surfaces as [`VanError::ApiError`] carrying the backend's
    /// user-facing message.
    pub async fn reserve(&self, request: &BookingRequest) -> Result<ReservationReceipt, VanError> {
        let body = self
            .client
            ._request_text(reqwest::Method::POST, "bookings/reserve", Some(request), true)
            .await?;
        parse_reservation_receipt(&body)
    }

    /// Seat numbers already booked for a route + departure-time pair.
    pub async fn booked_seats(
        &self,
        route_id: i64,
        departure_time: NaiveDateTime,
    ) -> Result<Vec<u8>, VanError> {
        let params = vec![
            ("routeId".to_string(), route_id.to_string()),
            (
                "departureTime".to_string(),
                departure_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
            ),
        ];
        self.client
            ._get_with_query("bookings/booked-seats", &params, true)
            .await
    }

    /// All bookings belonging to a user, newest first as the backend
    /// returns them.
    pub async fn for_user(&self, user_id: i64) -> Result<Vec<Booking>, VanError> {
        let endpoint = format!("bookings/user/{}", user_id);
        self.client
            ._request(reqwest::Method::GET, &endpoint, None::<&()>, true, None)
            .await
    }

    /// Cancels a booking. Irreversible on the backend.
    pub async fn cancel(&self, booking_id: i64) -> Result<(), VanError> {
        let endpoint = format!("bookings/{}/cancel", booking_id);
        self.client
            ._request_text(reqwest::Method::PUT, &endpoint, None::<&()>, true)
            .await?;
        Ok(())
    }

    /// Moves a booking to a different departure time. The backend takes
    /// the new time as a query parameter, not a body.
    pub async fn reschedule(
        &self,
        booking_id: i64,
        new_departure_time: NaiveDateTime,
    ) -> Result<(), VanError> {
        let endpoint = format!(
            "bookings/{}/reschedule?newDepartureTime={}",
            booking_id,
            new_departure_time.format("%Y-%m-%dT%H:%M:%S")
        );
        self.client
            ._request_text(reqwest::Method::PUT, &endpoint, None::<&()>, true)
            .await?;
        Ok(())
    }
}

/// Normalizes a Thai contact phone number to at most 10 digits, stripping
/// punctuation and spacing. Returns an error when no digits survive.
pub fn normalize_phone(raw: &str) -> Result<String, VanError> {
    let non_digit = Regex::new(r"\D").map_err(|e| VanError::SdkError(e.to_string()))?;
    let digits: String = non_digit.replace_all(raw, "").chars().take(10).collect();
    if digits.is_empty() {
        return Err(VanError::InvalidInput(format!(
            "contact phone '{}' contains no digits",
            raw
        )));
    }
    Ok(digits)
}
