// src/station.rs

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A boarding station.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: i64,
    pub province: String,
    pub station_name: String,
    pub is_main_hub: bool,
}

/// Payload for creating or updating a station (admin only).
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewStation {
    pub station_name: String,
    pub province: String,
    pub is_main_hub: bool,
}

// Coordinates for the stations seeded in the backend's schema. The table is
// keyed by display name and used only to anchor the geofence fallback
// segment; stations missing from it simply have no map support.
const STATION_COORDS: &[(&str, f64, f64)] = &[
    ("มก. กำแพงแสน", 14.0227, 99.9723),
    ("องค์พระปฐมเจดีย์", 13.8196, 100.0601),
    ("มหาวิทยาลัยมหิดล ศาลายา", 13.7934, 100.3225),
    ("มหาวิทยาลัยศิลปากร / พระราชวังสนามจันทร์", 13.8193, 100.0445),
    ("เซ็นทรัล นครปฐม", 13.8126, 100.0401),
    ("ตลาดท่านา (นครชัยศรี)", 13.8175, 100.1834),
    ("เซ็นทรัล เวสต์เกต (บางใหญ่)", 13.8762, 100.4114),
    ("เดอะมอลล์ งามวงศ์วาน", 13.8596, 100.5432),
    ("เมืองทองธานี (อิมแพ็ค)", 13.9114, 100.5491),
    ("ปากเกร็ด / แจ้งวัฒนะ", 13.9079, 100.4996),
    ("สถานีรถไฟฟ้า MRT สายสีม่วง", 13.8601, 100.4123),
    ("ฟิวเจอร์พาร์ค รังสิต", 13.9892, 100.6177),
    ("มหาวิทยาลัยธรรมศาสตร์ / รพ.ธรรมศาสตร์", 14.0754, 100.6148),
    ("มหาวิทยาลัยกรุงเทพ (รังสิต)", 14.0396, 100.6146),
    ("นิคมอุตสาหกรรมนวนคร", 14.1206, 100.6063),
    ("มก. บางเขน", 13.8476, 100.5696),
    ("อนุสาวรีย์ชัยสมรภูมิ", 13.7649, 100.5383),
    ("สถานีกลางกรุงเทพอภิวัฒน์ (บางซื่อ)", 13.8042, 100.5401),
    ("สถานีขนส่งหมอชิต 2", 13.8131, 100.5489),
    ("สถานีขนส่งสายใต้ใหม่ (บรมฯ)", 13.7806, 100.4229),
    ("สนามบินดอนเมือง", 13.9126, 100.6067),
    ("เอกมัย", 13.7191, 100.5843),
];

fn lookup(name: &str) -> Option<GeoPoint> {
    STATION_COORDS
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|&(_, lat, lng)| GeoPoint::new(lat, lng))
}

/// Looks up a station's coordinates by display name.
///
/// UI code composes names as `"Province - StationName"` or
/// `"StationName, Province"`; both forms are peeled back to the bare name
/// before the table lookup.
pub fn station_coordinates(display_name: &str) -> Option<GeoPoint> {
    if let Some((province, station)) = display_name.split_once(" - ") {
        if let Some(p) = lookup(station.trim()) {
            return Some(p);
        }
        if let Some(p) = lookup(province.trim()) {
            return Some(p);
        }
    }
    let plain = display_name
        .split(',')
        .next()
        .unwrap_or(display_name)
        .trim();
    lookup(plain)
}

impl Station {
    /// Coordinates of this station, if it appears in the seeded table.
    pub fn coordinates(&self) -> Option<GeoPoint> {
        station_coordinates(&self.station_name)
    }
}
