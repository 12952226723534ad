//! Data models
//!
//! Wire shapes for the restaurant API. Field names are camelCase on the wire.

pub mod booking;
pub mod restaurant;

// Re-exports
pub use booking::*;
pub use restaurant::*;
