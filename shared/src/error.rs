//! Error types for the shared crate

use thiserror::Error;

/// Parse failures for values that arrive as free text (option values, path ids)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unknown sort option
    #[error("Unknown sort key: {0}")]
    SortKey(String),

    /// Restaurant id is not a positive integer
    #[error("Invalid restaurant id: {0}")]
    RestaurantId(String),

    /// Unknown booking form field
    #[error("Unknown booking field: {0}")]
    BookingField(String),
}
