use chrono::{NaiveDate, NaiveDateTime};
use easyvan_rs::geo::GeoPoint;
use easyvan_rs::geofence::RoutePolyline;
use easyvan_rs::route::Route;
use easyvan_rs::schedule::{Schedule, ScheduleStatus, Vehicle};
use easyvan_rs::station::Station;
use easyvan_rs::trip::TripDraft;
use easyvan_rs::user::{Role, User};
use easyvan_rs::VanError;

fn station(id: i64, name: &str, province: &str) -> Station {
    Station {
        id,
        province: province.to_string(),
        station_name: name.to_string(),
        is_main_hub: id == 1,
    }
}

fn kamphaeng_saen() -> Station {
    station(1, "มก. กำแพงแสน", "นครปฐม")
}

fn phra_pathom_chedi() -> Station {
    station(2, "องค์พระปฐมเจดีย์", "นครปฐม")
}

fn salaya() -> Station {
    station(3, "มหาวิทยาลัยมหิดล ศาลายา", "นครปฐม")
}

fn route(id: i64, origin: Station, destination: Station) -> Route {
    Route {
        id,
        origin_station: origin,
        destination_station: destination,
        base_price: 120.0,
        estimated_duration: 45,
        is_active: true,
    }
}

fn driver() -> User {
    User {
        id: 7,
        username: "driver01".to_string(),
        full_name: "สมชาย ขับดี".to_string(),
        role: Role::Driver,
        phone_number: Some("0812345678".to_string()),
        email: None,
        avatar: None,
    }
}

fn departure() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 9, 1)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

fn schedule(route: Route) -> Schedule {
    Schedule {
        id: 11,
        route,
        driver: driver(),
        vehicle: Vehicle {
            id: 3,
            plate_number: "นฐ 1234".to_string(),
            model: "Toyota Commuter".to_string(),
            capacity: 13,
        },
        departure_time: departure(),
        status: ScheduleStatus::Available,
    }
}

fn draft_with_corridor() -> TripDraft {
    let mut draft = TripDraft::new();
    draft.set_origin(kamphaeng_saen());
    draft.set_destination(phra_pathom_chedi());
    draft.set_polyline(RoutePolyline::default()).unwrap();
    draft
}

#[test]
fn changing_origin_clears_pins_schedule_and_corridor() {
    let mut draft = draft_with_corridor();
    let r = route(1, kamphaeng_saen(), phra_pathom_chedi());
    draft.set_schedule(schedule(r));
    draft.pin_pickup(GeoPoint::new(14.0227, 99.9723)).unwrap();
    draft.toggle_seat(4).unwrap();

    draft.set_origin(salaya());

    assert!(draft.pickup().is_none());
    assert!(draft.dropoff().is_none());
    assert!(draft.corridor().is_none());
    assert!(draft.schedule().is_none());
    assert_eq!(draft.seat_map().selected(), None);
}

#[test]
fn changing_destination_clears_pins_schedule_and_corridor() {
    let mut draft = draft_with_corridor();
    draft.pin_dropoff(GeoPoint::new(13.8196, 100.0601)).unwrap();

    draft.set_destination(salaya());

    assert!(draft.dropoff().is_none());
    assert!(draft.corridor().is_none());
}

#[test]
fn pinning_without_a_corridor_is_rejected() {
    let mut draft = TripDraft::new();
    draft.set_origin(kamphaeng_saen());
    draft.set_destination(phra_pathom_chedi());

    let err = draft.pin_pickup(GeoPoint::new(14.0227, 99.9723)).unwrap_err();
    assert!(matches!(err, VanError::InvalidInput(_)));
}

#[test]
fn pin_outside_the_corridor_is_rejected_and_not_stored() {
    let mut draft = draft_with_corridor();

    let err = draft.pin_pickup(GeoPoint::new(14.5, 99.5)).unwrap_err();
    assert!(matches!(err, VanError::OutOfGeofence { threshold_meters: 500 }));
    assert!(draft.pickup().is_none());
}

#[test]
fn pin_near_the_route_is_accepted_and_stored() {
    let mut draft = draft_with_corridor();

    let candidate = GeoPoint::new(14.0227, 99.9723);
    let pinned = draft.pin_pickup(candidate).unwrap();
    assert_eq!(pinned, candidate);
    assert_eq!(draft.pickup(), Some(candidate));

    draft.clear_pickup();
    assert!(draft.pickup().is_none());
}

#[test]
fn polyline_requires_known_station_coordinates() {
    let mut draft = TripDraft::new();
    draft.set_origin(station(50, "สถานีทดสอบ", "นครปฐม"));
    draft.set_destination(phra_pathom_chedi());

    let err = draft.set_polyline(RoutePolyline::default()).unwrap_err();
    assert!(matches!(err, VanError::InvalidInput(_)));
}

#[test]
fn destination_validity_follows_the_route_catalog() {
    let routes = vec![
        route(1, kamphaeng_saen(), phra_pathom_chedi()),
        route(2, kamphaeng_saen(), salaya()),
    ];

    let mut draft = TripDraft::new();
    // Without both stations picked there is nothing to invalidate.
    assert!(draft.destination_still_valid(&routes));

    draft.set_origin(kamphaeng_saen());
    draft.set_destination(phra_pathom_chedi());
    assert!(draft.destination_still_valid(&routes));

    draft.set_origin(phra_pathom_chedi());
    draft.set_destination(salaya());
    assert!(!draft.destination_still_valid(&routes));
}

#[test]
fn changing_travel_date_resets_departure_and_seats() {
    let mut draft = draft_with_corridor();
    let r = route(1, kamphaeng_saen(), phra_pathom_chedi());
    draft.set_schedule(schedule(r));
    draft.toggle_seat(2).unwrap();

    draft.set_travel_date(NaiveDate::from_ymd_opt(2026, 9, 2).unwrap());

    assert!(draft.schedule().is_none());
    assert_eq!(draft.seat_map().selected(), None);
    assert_eq!(
        draft.travel_date(),
        Some(NaiveDate::from_ymd_opt(2026, 9, 2).unwrap())
    );
}

#[test]
fn booking_request_uses_station_names_without_pins() {
    let r = route(1, kamphaeng_saen(), phra_pathom_chedi());
    let mut draft = draft_with_corridor();
    draft.set_schedule(schedule(r.clone()));
    draft.toggle_seat(4).unwrap();

    let request = draft
        .booking_request(&r, 21, "090-972-8265", "ขึ้นหน้าประตู 1")
        .unwrap();

    assert_eq!(request.route_id, 1);
    assert_eq!(request.user_id, 21);
    assert_eq!(request.seat_number, 4);
    assert_eq!(request.departure_time, departure());
    assert_eq!(request.pickup_point, "มก. กำแพงแสน");
    assert_eq!(request.pickup_lat, None);
    assert_eq!(request.dropoff_point, "องค์พระปฐมเจดีย์");
    assert_eq!(request.contact_phone, "0909728265");
    assert_eq!(request.total_price, 120.0);
}

#[test]
fn booking_request_labels_custom_pins_with_coordinates() {
    let r = route(1, kamphaeng_saen(), phra_pathom_chedi());
    let mut draft = draft_with_corridor();
    draft.set_schedule(schedule(r.clone()));
    draft.toggle_seat(4).unwrap();
    let pin = GeoPoint::new(14.0227, 99.9723);
    draft.pin_pickup(pin).unwrap();

    let request = draft.booking_request(&r, 21, "0909728265", "").unwrap();

    assert_eq!(request.pickup_point, "Custom (14.0227, 99.9723)");
    assert_eq!(request.pickup_lat, Some(14.0227));
    assert_eq!(request.pickup_lng, Some(99.9723));
    // No dropoff pin, so the destination station stands in.
    assert_eq!(request.dropoff_point, "องค์พระปฐมเจดีย์");
    assert_eq!(request.dropoff_lat, None);
}

#[test]
fn booking_request_requires_departure_and_seat() {
    let r = route(1, kamphaeng_saen(), phra_pathom_chedi());

    let mut draft = draft_with_corridor();
    let err = draft.booking_request(&r, 21, "0909728265", "").unwrap_err();
    assert!(matches!(err, VanError::InvalidInput(_)));

    draft.set_schedule(schedule(r.clone()));
    let err = draft.booking_request(&r, 21, "0909728265", "").unwrap_err();
    assert!(matches!(err, VanError::InvalidInput(_)));
}
