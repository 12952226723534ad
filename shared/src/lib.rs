//! Shared types for the table booking client
//!
//! Wire models for the restaurant API, the restaurant list query
//! (filter + sort) and the booking form validator. Everything here is
//! pure: no I/O, no clock reads. Callers pass "now" in explicitly.

pub mod error;
pub mod models;
pub mod query;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::ParseError;
pub use models::{
    BookingForm, BookingRequest, OpeningHours, RestaurantDetail, RestaurantDetailsResponse,
    RestaurantId, RestaurantSummary,
};
pub use query::{RestaurantQuery, SortKey};
pub use validation::{BookingField, FieldErrors, validate_booking, validate_field};
