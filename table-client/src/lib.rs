//! Table Client - restaurant directory and booking client
//!
//! Talks to the restaurant API over HTTP and owns the view state a front end
//! binds to: the restaurant list (filter/sort), the selected restaurant's
//! details, the booking form, and which screen is showing.

pub mod app;
pub mod config;
pub mod error;
pub mod http;
pub mod view;

pub use app::{App, Screen};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, RestaurantApi};
pub use view::{
    BookingFormController, BookingStatus, FetchState, ListOutcome, RestaurantDetailsView,
    RestaurantListView, SubmitOutcome,
};

// Re-export shared types for convenience
pub use shared::{
    BookingField, BookingForm, BookingRequest, FieldErrors, RestaurantDetail, RestaurantId,
    RestaurantQuery, RestaurantSummary, SortKey,
};
