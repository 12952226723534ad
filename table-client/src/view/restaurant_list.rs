//! Restaurant list screen state

use super::FetchState;
use crate::RestaurantApi;
use shared::{RestaurantId, RestaurantQuery, RestaurantSummary, SortKey};

/// Error prefix for a failed list fetch
pub const LIST_ERROR_CONTEXT: &str = "Error fetching restaurants";

/// Guidance shown when the filter leaves nothing
pub const NO_RESULTS_MESSAGE: &str = "There are not results. Try to reset the filters";

/// What the list region should render
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    Loading,
    Error(String),
    /// Fetched fine but nothing matches the filter
    NoResults,
    Restaurants(Vec<RestaurantSummary>),
}

/// Fetched restaurants plus the user's filter and sort choice
#[derive(Debug, Clone, Default)]
pub struct RestaurantListView {
    state: FetchState<Vec<RestaurantSummary>>,
    query: RestaurantQuery,
}

impl RestaurantListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the list once; failures become a display message, never an error
    pub async fn load<A: RestaurantApi + ?Sized>(&mut self, api: &A) {
        self.state.begin();
        let result = api.list_restaurants().await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Failed to fetch restaurants");
        }
        self.state.finish(result, LIST_ERROR_CONTEXT);
    }

    pub fn state(&self) -> &FetchState<Vec<RestaurantSummary>> {
        &self.state
    }

    pub fn query(&self) -> &RestaurantQuery {
        &self.query
    }

    pub fn filter(&self) -> &str {
        &self.query.filter
    }

    pub fn sort(&self) -> SortKey {
        self.query.sort
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.query.filter = filter.into();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    pub fn reset_filters(&mut self) {
        self.query.reset();
    }

    /// Whether to offer "Clear filters"
    pub fn show_clear_filters(&self) -> bool {
        self.query.is_filtered()
    }

    /// Filtered and sorted restaurants; empty while loading or on error
    pub fn visible(&self) -> Vec<RestaurantSummary> {
        match &self.state {
            FetchState::Loaded(restaurants) => self.query.apply(restaurants),
            _ => Vec::new(),
        }
    }

    pub fn outcome(&self) -> ListOutcome {
        match &self.state {
            FetchState::Loading => ListOutcome::Loading,
            FetchState::Errored(message) => ListOutcome::Error(message.clone()),
            FetchState::Idle => ListOutcome::NoResults,
            FetchState::Loaded(restaurants) => {
                let visible = self.query.apply(restaurants);
                if visible.is_empty() {
                    ListOutcome::NoResults
                } else {
                    ListOutcome::Restaurants(visible)
                }
            }
        }
    }

    /// Id behind a visible row, for the selection callback
    pub fn id_at(&self, index: usize) -> Option<RestaurantId> {
        self.visible().get(index).map(|r| r.id)
    }
}
