//! Booking form validation
//!
//! - [`BookingField`]: the six form fields
//! - [`FieldErrors`]: one message per failing field, in form order
//! - [`validate_booking`]: whole-form check used on submit
//! - [`validate_field`]: single-field check used on blur

mod booking;

pub use booking::{MAX_GUESTS, MIN_LEAD_TIME_HOURS, validate_booking, validate_field};

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Booking form field, ordered as the form lays them out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingField {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Guests,
}

impl BookingField {
    pub const ALL: [BookingField; 6] = [
        BookingField::Name,
        BookingField::Email,
        BookingField::Phone,
        BookingField::Date,
        BookingField::Time,
        BookingField::Guests,
    ];

    /// Field path in the error mapping and the JSON body
    pub fn path(self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Email => "email",
            BookingField::Phone => "phone",
            BookingField::Date => "date",
            BookingField::Time => "time",
            BookingField::Guests => "guests",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingField::Name => "Name",
            BookingField::Email => "Email",
            BookingField::Phone => "Phone",
            BookingField::Date => "Date",
            BookingField::Time => "Time",
            BookingField::Guests => "Guests",
        }
    }

    /// Email and phone are checked as soon as focus leaves them
    pub fn validates_on_blur(self) -> bool {
        matches!(self, BookingField::Email | BookingField::Phone)
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for BookingField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingField::ALL
            .into_iter()
            .find(|f| f.path() == s)
            .ok_or_else(|| ParseError::BookingField(s.to_string()))
    }
}

/// Per-field error messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<BookingField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message recorded for a field
    pub fn add(&mut self, field: BookingField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn set(&mut self, field: BookingField, message: Option<String>) {
        match message {
            Some(m) => {
                self.0.insert(field, m);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (BookingField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// String-keyed mapping; dotted paths expand into nested objects
    pub fn to_path_map(&self) -> Value {
        let mut root = Map::new();
        for (field, message) in &self.0 {
            insert_path(&mut root, field.path(), message);
        }
        Value::Object(root)
    }
}

fn insert_path(root: &mut Map<String, Value>, path: &str, message: &str) {
    match path.split_once('.') {
        None => {
            root.insert(path.to_string(), Value::String(message.to_string()));
        }
        Some((head, rest)) => {
            let child = root
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(map) = child {
                insert_path(map, rest, message);
            }
        }
    }
}
