use chrono::{NaiveDate, NaiveDateTime};
use easyvan_rs::booking::{Booking, BookingRequest, BookingStatus};
use easyvan_rs::payment::promptpay_qr_url;
use easyvan_rs::schedule::{Schedule, ScheduleStatus};
use easyvan_rs::station::station_coordinates;
use easyvan_rs::{EasyVan, VanError};

fn departure() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 9, 1)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

#[test]
fn server_url_gets_a_default_scheme() {
    let client = EasyVan::new("localhost:8080").unwrap();
    assert_eq!(client.server_url, "http://localhost:8080");
}

#[test]
fn server_url_keeps_an_explicit_https_scheme() {
    let client = EasyVan::new("https://van.example.com").unwrap();
    assert_eq!(client.server_url, "https://van.example.com");
}

#[test]
fn server_url_trailing_slash_is_stripped() {
    let client = EasyVan::new("http://localhost:8080/").unwrap();
    assert_eq!(client.server_url, "http://localhost:8080");
}

#[test]
fn server_url_api_suffix_is_stripped() {
    // Deployments sometimes configure the backend URL with /api included.
    let client = EasyVan::new("http://localhost:8080/api").unwrap();
    assert_eq!(client.server_url, "http://localhost:8080");
    let client = EasyVan::new("http://localhost:8080/api/").unwrap();
    assert_eq!(client.server_url, "http://localhost:8080");
}

#[test]
fn fresh_client_has_no_session() {
    let client = EasyVan::new("http://localhost:8080").unwrap();
    assert!(!client.is_authenticated());
    assert!(client.session_token().is_none());
    assert!(client.current_user().is_none());
}

// Authenticated endpoints must fail before any network I/O when no session
// is present, so these run against an address nothing listens on.
#[tokio::test]
async fn authenticated_request_without_session_fails_fast() {
    let client = EasyVan::new("http://127.0.0.1:1").unwrap();

    let err = client.bookings().for_user(1).await.unwrap_err();
    assert!(matches!(err, VanError::SessionTokenMissing));

    let err = client.driver().verify_pickup(1).await.unwrap_err();
    assert!(matches!(err, VanError::SessionTokenMissing));

    let err = client.admin().drivers().await.unwrap_err();
    assert!(matches!(err, VanError::SessionTokenMissing));
}

#[test]
fn booking_request_serializes_to_backend_field_names() {
    let request = BookingRequest {
        route_id: 1,
        departure_time: departure(),
        user_id: 21,
        seat_number: 4,
        pickup_point: "Custom (14.0227, 99.9723)".to_string(),
        pickup_lat: Some(14.0227),
        pickup_lng: Some(99.9723),
        dropoff_point: "องค์พระปฐมเจดีย์".to_string(),
        dropoff_lat: None,
        dropoff_lng: None,
        contact_phone: "0909728265".to_string(),
        remark: "".to_string(),
        total_price: 120.0,
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["routeId"], 1);
    assert_eq!(json["departureTime"], "2026-09-01T08:30:00");
    assert_eq!(json["userId"], 21);
    assert_eq!(json["seatNumber"], 4);
    assert_eq!(json["pickupPoint"], "Custom (14.0227, 99.9723)");
    assert_eq!(json["pickupLat"], 14.0227);
    assert_eq!(json["dropoffLat"], serde_json::Value::Null);
    assert_eq!(json["contactPhone"], "0909728265");
    assert_eq!(json["totalPrice"], 120.0);
}

#[test]
fn schedule_deserializes_from_backend_json() {
    let body = r#"{
        "id": 11,
        "route": {
            "id": 1,
            "originStation": {"id": 1, "province": "นครปฐม", "stationName": "มก. กำแพงแสน", "isMainHub": true},
            "destinationStation": {"id": 2, "province": "นครปฐม", "stationName": "องค์พระปฐมเจดีย์", "isMainHub": false},
            "basePrice": 120.0,
            "estimatedDuration": 45,
            "isActive": true
        },
        "driver": {"id": 7, "username": "driver01", "fullName": "สมชาย ขับดี", "role": "DRIVER"},
        "vehicle": {"id": 3, "plateNumber": "นฐ 1234", "model": "Toyota Commuter", "capacity": 13},
        "departureTime": "2026-09-01T08:30:00",
        "status": "AVAILABLE"
    }"#;

    let schedule: Schedule = serde_json::from_str(body).unwrap();
    assert_eq!(schedule.id, 11);
    assert_eq!(schedule.route.origin_station.station_name, "มก. กำแพงแสน");
    assert_eq!(schedule.departure_time, departure());
    assert_eq!(schedule.status, ScheduleStatus::Available);
}

#[test]
fn booking_deserializes_and_absorbs_unknown_status() {
    let body = r#"{
        "id": 42,
        "schedule": {
            "id": 11,
            "route": {
                "id": 1,
                "originStation": {"id": 1, "province": "นครปฐม", "stationName": "มก. กำแพงแสน", "isMainHub": true},
                "destinationStation": {"id": 2, "province": "นครปฐม", "stationName": "องค์พระปฐมเจดีย์", "isMainHub": false},
                "basePrice": 120.0,
                "estimatedDuration": 45,
                "isActive": true
            },
            "driver": {"id": 7, "username": "driver01", "fullName": "สมชาย ขับดี", "role": "DRIVER"},
            "vehicle": {"id": 3, "plateNumber": "นฐ 1234", "model": "Toyota Commuter", "capacity": 13},
            "departureTime": "2026-09-01T08:30:00",
            "status": "AVAILABLE"
        },
        "seatNumber": 4,
        "pickupPoint": "มก. กำแพงแสน",
        "status": "REFUNDED",
        "totalPrice": 120.0
    }"#;

    let booking: Booking = serde_json::from_str(body).unwrap();
    assert_eq!(booking.id, Some(42));
    assert_eq!(booking.seat_number, 4);
    // A status this SDK version does not know about must not break parsing.
    assert_eq!(booking.status, BookingStatus::Unknown);
}

#[test]
fn station_coordinates_accept_both_display_forms() {
    let bare = station_coordinates("มก. กำแพงแสน").unwrap();
    let dashed = station_coordinates("นครปฐม - มก. กำแพงแสน").unwrap();
    let comma = station_coordinates("มก. กำแพงแสน, นครปฐม").unwrap();
    assert_eq!(bare, dashed);
    assert_eq!(bare, comma);
    assert!((bare.latitude - 14.0227).abs() < 1e-9);

    assert!(station_coordinates("สถานีไม่รู้จัก").is_none());
}

#[test]
fn promptpay_url_formats_amount_to_satang() {
    assert_eq!(
        promptpay_qr_url("0909728265", 120.0),
        "https://promptpay.io/0909728265/120.00.png"
    );
    assert_eq!(
        promptpay_qr_url("0909728265", 99.5),
        "https://promptpay.io/0909728265/99.50.png"
    );
}
