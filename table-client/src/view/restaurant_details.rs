//! Restaurant details panel state

use super::FetchState;
use crate::RestaurantApi;
use shared::{RestaurantDetail, RestaurantId};

/// Error prefix for a failed details fetch
pub const DETAILS_ERROR_CONTEXT: &str = "Error fetching restaurant details";

/// Details for the selected restaurant
///
/// With no selection the view stays `Idle`, never fetches, and renders nothing.
#[derive(Debug, Clone, Default)]
pub struct RestaurantDetailsView {
    restaurant_id: Option<RestaurantId>,
    state: FetchState<RestaurantDetail>,
}

impl RestaurantDetailsView {
    pub fn new(restaurant_id: Option<RestaurantId>) -> Self {
        Self {
            restaurant_id,
            state: FetchState::Idle,
        }
    }

    pub fn restaurant_id(&self) -> Option<RestaurantId> {
        self.restaurant_id
    }

    /// Point the panel at another restaurant; the old details are dropped
    pub fn select(&mut self, restaurant_id: Option<RestaurantId>) {
        if self.restaurant_id != restaurant_id {
            self.restaurant_id = restaurant_id;
            self.state.reset();
        }
    }

    /// Fetch details for the current selection, replacing any previous result
    pub async fn load<A: RestaurantApi + ?Sized>(&mut self, api: &A) {
        let Some(id) = self.restaurant_id else {
            return;
        };

        self.state.begin();
        let result = api.restaurant_details(id).await;
        if let Err(e) = &result {
            tracing::warn!(restaurant_id = %id, error = %e, "Failed to fetch restaurant details");
        }
        self.state.finish(result, DETAILS_ERROR_CONTEXT);
    }

    pub fn state(&self) -> &FetchState<RestaurantDetail> {
        &self.state
    }

    /// Whether the panel renders at all
    pub fn is_visible(&self) -> bool {
        self.restaurant_id.is_some()
    }

    pub fn details(&self) -> Option<&RestaurantDetail> {
        self.state.value()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }
}
