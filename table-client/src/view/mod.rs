//! View state controllers
//!
//! Each controller owns the state one screen region renders from and
//! performs at most one request at a time against a [`RestaurantApi`].
//!
//! [`RestaurantApi`]: crate::RestaurantApi

mod booking;
mod fetch;
mod restaurant_details;
mod restaurant_list;

pub use booking::{BookingFormController, BookingStatus, SubmitOutcome};
pub use fetch::FetchState;
pub use restaurant_details::RestaurantDetailsView;
pub use restaurant_list::{ListOutcome, RestaurantListView};
