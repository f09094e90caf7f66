// src/trip.rs

use chrono::NaiveDate;

use crate::booking::{normalize_phone, BookingRequest};
use crate::error::VanError;
use crate::geo::GeoPoint;
use crate::geofence::{Corridor, RoutePolyline};
use crate::route::Route;
use crate::schedule::Schedule;
use crate::seatmap::SeatMap;
use crate::station::Station;

/// Draft of one booking as the passenger assembles it: stations, date,
/// departure, seat, and optional custom pickup/dropoff pins.
///
/// The draft owns the invalidation rules the UI relies on. The central one
/// is explicit rather than derived: **changing the origin or destination
/// station clears both pins, the chosen departure, and the corridor**,
/// because a pin is only meaningful against the polyline snapshot it was
/// validated on.
#[derive(Debug, Clone, Default)]
pub struct TripDraft {
    origin: Option<Station>,
    destination: Option<Station>,
    travel_date: Option<NaiveDate>,
    schedule: Option<Schedule>,
    seat_map: SeatMap,
    corridor: Option<Corridor>,
    pickup: Option<GeoPoint>,
    dropoff: Option<GeoPoint>,
}

impl TripDraft {
    pub fn new() -> Self {
        TripDraft::default()
    }

    pub fn origin(&self) -> Option<&Station> {
        self.origin.as_ref()
    }

    pub fn destination(&self) -> Option<&Station> {
        self.destination.as_ref()
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    pub fn corridor(&self) -> Option<&Corridor> {
        self.corridor.as_ref()
    }

    pub fn pickup(&self) -> Option<GeoPoint> {
        self.pickup
    }

    pub fn dropoff(&self) -> Option<GeoPoint> {
        self.dropoff
    }

    pub fn seat_map(&self) -> &SeatMap {
        &self.seat_map
    }

    /// Sets the origin station and invalidates everything downstream of
    /// the route choice.
    pub fn set_origin(&mut self, station: Station) {
        self.origin = Some(station);
        self.invalidate_route_state();
    }

    /// Sets the destination station and invalidates everything downstream
    /// of the route choice.
    pub fn set_destination(&mut self, station: Station) {
        self.destination = Some(station);
        self.invalidate_route_state();
    }

    fn invalidate_route_state(&mut self) {
        self.pickup = None;
        self.dropoff = None;
        self.corridor = None;
        self.schedule = None;
        self.seat_map = SeatMap::default();
    }

    /// True while the chosen destination is still reachable from the
    /// chosen origin in the given route catalog. The UI clears the
    /// destination select when this turns false.
    pub fn destination_still_valid(&self, routes: &[Route]) -> bool {
        match (&self.origin, &self.destination) {
            (Some(origin), Some(dest)) => {
                crate::route::find_route(routes, origin.id, dest.id).is_some()
            }
            _ => true,
        }
    }

    pub fn travel_date(&self) -> Option<NaiveDate> {
        self.travel_date
    }

    pub fn set_travel_date(&mut self, date: NaiveDate) {
        self.travel_date = Some(date);
        self.schedule = None;
        self.seat_map = SeatMap::default();
    }

    pub fn set_schedule(&mut self, schedule: Schedule) {
        self.schedule = Some(schedule);
        self.seat_map = SeatMap::default();
    }

    /// Replaces the booked-seat list for the chosen departure.
    pub fn set_booked_seats(&mut self, booked: &[u8]) {
        self.seat_map.set_booked(booked);
    }

    /// Applies a click on a seat. See [`SeatMap::toggle`].
    pub fn toggle_seat(&mut self, seat: u8) -> Result<(), VanError> {
        self.seat_map.toggle(seat)?;
        Ok(())
    }

    /// Installs the routed polyline for the current station pair, replacing
    /// any previous corridor wholesale. Requires both stations to have
    /// known coordinates (they anchor the fallback segment).
    pub fn set_polyline(&mut self, polyline: RoutePolyline) -> Result<(), VanError> {
        let origin = self
            .origin
            .as_ref()
            .and_then(Station::coordinates)
            .ok_or_else(|| {
                VanError::InvalidInput("origin station has no known coordinates".to_string())
            })?;
        let destination = self
            .destination
            .as_ref()
            .and_then(Station::coordinates)
            .ok_or_else(|| {
                VanError::InvalidInput("destination station has no known coordinates".to_string())
            })?;

        self.corridor = Some(Corridor::new(origin, destination, polyline));
        Ok(())
    }

    /// Pins a custom pickup point, running it through the geofence
    /// validator first.
    pub fn pin_pickup(&mut self, candidate: GeoPoint) -> Result<GeoPoint, VanError> {
        let corridor = self.corridor.as_ref().ok_or_else(|| {
            VanError::InvalidInput("no active route corridor to validate against".to_string())
        })?;
        let point = corridor.validate(candidate)?;
        self.pickup = Some(point);
        Ok(point)
    }

    /// Pins a custom dropoff point, running it through the geofence
    /// validator first.
    pub fn pin_dropoff(&mut self, candidate: GeoPoint) -> Result<GeoPoint, VanError> {
        let corridor = self.corridor.as_ref().ok_or_else(|| {
            VanError::InvalidInput("no active route corridor to validate against".to_string())
        })?;
        let point = corridor.validate(candidate)?;
        self.dropoff = Some(point);
        Ok(point)
    }

    pub fn clear_pickup(&mut self) {
        self.pickup = None;
    }

    pub fn clear_dropoff(&mut self) {
        self.dropoff = None;
    }

    /// Assembles the reservation payload. Custom pins become
    /// `"Custom (lat, lng)"` labels plus raw coordinates; without a pin the
    /// station name stands in and the coordinate fields stay empty.
    pub fn booking_request(
        &self,
        route: &Route,
        user_id: i64,
        contact_phone: &str,
        remark: &str,
    ) -> Result<BookingRequest, VanError> {
        let schedule = self
            .schedule
            .as_ref()
            .ok_or_else(|| VanError::InvalidInput("no departure selected".to_string()))?;
        let seat_number = self
            .seat_map
            .selected()
            .ok_or_else(|| VanError::InvalidInput("no seat selected".to_string()))?;

        let (pickup_point, pickup_lat, pickup_lng) = match self.pickup {
            Some(p) => (
                format!("Custom ({}, {})", p.latitude, p.longitude),
                Some(p.latitude),
                Some(p.longitude),
            ),
            None => (route.origin_station.station_name.clone(), None, None),
        };
        let (dropoff_point, dropoff_lat, dropoff_lng) = match self.dropoff {
            Some(p) => (
                format!("Custom ({}, {})", p.latitude, p.longitude),
                Some(p.latitude),
                Some(p.longitude),
            ),
            None => (route.destination_station.station_name.clone(), None, None),
        };

        Ok(BookingRequest {
            route_id: route.id,
            departure_time: schedule.departure_time,
            user_id,
            seat_number,
            pickup_point,
            pickup_lat,
            pickup_lng,
            dropoff_point,
            dropoff_lat,
            dropoff_lng,
            contact_phone: normalize_phone(contact_phone)?,
            remark: remark.to_string(),
            total_price: route.base_price,
        })
    }
}
