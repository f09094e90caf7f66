// src/seatmap.rs

use crate::error::VanError;

/// Fixed 13-seat van layout; seats are numbered 1 through 13.
pub const VAN_CAPACITY: u8 = 13;

/// Presentation state of a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    Available,
    Selected,
    Taken,
}

/// Seat-selection reducer for one route + departure-time pair.
///
/// Driven by the server-provided list of already-booked seat numbers. At
/// most one seat is `Selected` at a time; selecting the selected seat
/// deselects it; `Taken` seats are not selectable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeatMap {
    taken: Vec<u8>,
    selected: Option<u8>,
}

impl SeatMap {
    /// Builds a seat map from booked seat numbers. Numbers outside 1..=13
    /// are ignored.
    pub fn new(booked: &[u8]) -> Self {
        let mut taken: Vec<u8> = booked
            .iter()
            .copied()
            .filter(|s| (1..=VAN_CAPACITY).contains(s))
            .collect();
        taken.sort_unstable();
        taken.dedup();
        SeatMap {
            taken,
            selected: None,
        }
    }

    pub fn status(&self, seat: u8) -> SeatStatus {
        if self.taken.contains(&seat) {
            SeatStatus::Taken
        } else if self.selected == Some(seat) {
            SeatStatus::Selected
        } else {
            SeatStatus::Available
        }
    }

    /// The currently selected seat number, if any.
    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    /// Applies a click on `seat` and returns its new status.
    pub fn toggle(&mut self, seat: u8) -> Result<SeatStatus, VanError> {
        if !(1..=VAN_CAPACITY).contains(&seat) {
            return Err(VanError::InvalidInput(format!(
                "seat number {} is outside 1..={}",
                seat, VAN_CAPACITY
            )));
        }
        if self.taken.contains(&seat) {
            return Err(VanError::SeatTaken(seat));
        }
        if self.selected == Some(seat) {
            self.selected = None;
            Ok(SeatStatus::Available)
        } else {
            self.selected = Some(seat);
            Ok(SeatStatus::Selected)
        }
    }

    /// Replaces the booked-seat list wholesale, e.g. after the user picks a
    /// different departure. A selection that became taken is dropped.
    pub fn set_booked(&mut self, booked: &[u8]) {
        let selected = self.selected;
        *self = SeatMap::new(booked);
        if let Some(seat) = selected {
            if !self.taken.contains(&seat) {
                self.selected = Some(seat);
            }
        }
    }
}
