//! Booking Model

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Raw booking form values, exactly as typed by the user
///
/// This is also the `POST /bookings` body: every value goes out as the
/// string that was entered, including `guests`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
}

/// A booking that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// 1..=12
    pub guests: u8,
}

impl BookingRequest {
    /// Local wall-clock instant of the reservation
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
