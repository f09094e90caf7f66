// src/schedule.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::route::Route;
use crate::user::User;

/// A van in the fleet.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub plate_number: String,
    pub model: String,
    pub capacity: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    Available,
    Full,
    Cancelled,
}

/// One departure of a route: a driver, a vehicle, and a departure time.
/// Departure times come from the backend as zone-less Java `LocalDateTime`
/// strings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i64,
    pub route: Route,
    pub driver: User,
    pub vehicle: Vehicle,
    pub departure_time: NaiveDateTime,
    pub status: ScheduleStatus,
}

/// Payload for assigning a new departure (admin only).
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewSchedule {
    pub route: Route,
    pub driver: User,
    pub vehicle: Vehicle,
    pub departure_time: NaiveDateTime,
    pub status: ScheduleStatus,
}

/// A driver's assigned departure together with its headcount, as returned
/// by the driver dashboard endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriverSchedule {
    pub schedule: Schedule,
    pub passenger_count: i64,
}
