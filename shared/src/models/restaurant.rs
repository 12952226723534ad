//! Restaurant Model

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Restaurant identifier
///
/// Always strictly positive. A zero or missing id means "no selection" and is
/// represented as `Option::<RestaurantId>::None` by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RestaurantId(u32);

impl RestaurantId {
    /// Returns `None` for zero
    pub fn new(id: u32) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for RestaurantId {
    type Error = ParseError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::new(id).ok_or_else(|| ParseError::RestaurantId(id.to_string()))
    }
}

impl From<RestaurantId> for u32 {
    fn from(id: RestaurantId) -> Self {
        id.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RestaurantId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseError::RestaurantId(s.to_string()))
    }
}

/// Restaurant list entry (`GET /restaurants`)
///
/// The list endpoint also returns `cuisine` and a nested `details` object;
/// the list view does not use them and they are ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub id: RestaurantId,
    pub name: String,
    pub short_description: String,
    pub rating: f64,
}

/// Weekday / weekend opening hours, free text (e.g. "12:00 PM - 10:00 PM")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub weekday: String,
    pub weekend: String,
}

/// Extended restaurant record, fetched per selected restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetail {
    pub address: String,
    pub opening_hours: OpeningHours,
    pub review_score: f64,
    pub contact_email: String,
}

/// Envelope returned by `GET /restaurants/{id}`
///
/// `details` is absent for restaurants the server has no extended record for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetailsResponse {
    #[serde(default)]
    pub details: Option<RestaurantDetail>,
}
