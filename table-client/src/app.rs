//! Top-level screen controller
//!
//! Owns the selected restaurant id. The list screen selects through
//! [`App::select`]; the booking screen goes back through [`App::go_back`].
//! Nothing else holds the selection.

use crate::RestaurantApi;
use crate::view::{BookingFormController, RestaurantDetailsView, RestaurantListView};
use shared::RestaurantId;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    /// Details + booking form for one restaurant
    Booking(RestaurantId),
}

#[derive(Debug, Default)]
pub struct App {
    selected: Option<RestaurantId>,
    pub list: RestaurantListView,
    pub details: RestaurantDetailsView,
    pub booking: BookingFormController,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<RestaurantId> {
        self.selected
    }

    pub fn screen(&self) -> Screen {
        match self.selected {
            Some(id) => Screen::Booking(id),
            None => Screen::List,
        }
    }

    /// Open the booking screen; a zero id means "no selection"
    pub fn select(&mut self, id: u32) -> Screen {
        self.selected = RestaurantId::new(id);
        self.details.select(self.selected);
        if self.selected.is_some() {
            self.booking = BookingFormController::new();
        }
        tracing::debug!(restaurant_id = id, screen = ?self.screen(), "Selection changed");
        self.screen()
    }

    /// Back to the list
    pub fn go_back(&mut self) -> Screen {
        self.selected = None;
        self.details.select(None);
        self.screen()
    }

    /// Fetch whatever the current screen needs
    pub async fn refresh<A: RestaurantApi + ?Sized>(&mut self, api: &A) {
        match self.screen() {
            Screen::List => self.list.load(api).await,
            Screen::Booking(_) => self.details.load(api).await,
        }
    }
}
