pub mod admin;
pub mod auth;
pub mod booking;
pub mod client;
pub mod driver;
pub mod error;
pub mod geo;
pub mod geofence;
pub mod payment;
pub mod requests;
pub mod route;
pub mod routing;
pub mod schedule;
pub mod seatmap;
pub mod station;
pub mod trip;
pub mod user;

pub use client::{EasyVan, Session};
pub use error::VanError;
pub use geo::GeoPoint;
pub use geofence::{Corridor, RoutePolyline, Verdict, PIN_RADIUS_METERS};
pub use seatmap::{SeatMap, SeatStatus, VAN_CAPACITY};
pub use trip::TripDraft;

// Re-export key entity types if needed directly
pub use booking::{Booking, BookingRequest, BookingStatus};
pub use route::Route;
pub use schedule::{Schedule, ScheduleStatus, Vehicle};
pub use station::Station;
pub use user::{Role, User};
