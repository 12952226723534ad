//! Restaurant list query
//!
//! Filter + sort over the fetched restaurant list. The result is a pure
//! function of (source list, filter, sort key) and is recomputed on every read.

use crate::error::ParseError;
use crate::models::RestaurantSummary;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the filtered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    #[serde(alias = "rating-desc")]
    MaxRating,
    #[serde(alias = "rating-asc")]
    MinRating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::MaxRating,
        SortKey::MinRating,
    ];

    /// Option value used by the sort selector
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::MaxRating => "max-rating",
            SortKey::MinRating => "min-rating",
        }
    }

    /// Human-readable option label
    pub fn label(self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name - Asc",
            SortKey::NameDesc => "Name - Desc",
            SortKey::MaxRating => "Max Rating",
            SortKey::MinRating => "Min Rating",
        }
    }

    /// Comparator for this key
    ///
    /// Names compare case-sensitively by code point. Ratings use `total_cmp`
    /// so a NaN rating cannot break the sort.
    pub fn compare(self, a: &RestaurantSummary, b: &RestaurantSummary) -> Ordering {
        match self {
            SortKey::NameAsc => a.name.cmp(&b.name),
            SortKey::NameDesc => b.name.cmp(&a.name),
            SortKey::MaxRating => b.rating.total_cmp(&a.rating),
            SortKey::MinRating => a.rating.total_cmp(&b.rating),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-asc" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            "max-rating" | "rating-desc" => Ok(SortKey::MaxRating),
            "min-rating" | "rating-asc" => Ok(SortKey::MinRating),
            other => Err(ParseError::SortKey(other.to_string())),
        }
    }
}

/// Filter text + sort key for the restaurant list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantQuery {
    /// Case-insensitive substring matched against the name
    pub filter: String,
    pub sort: SortKey,
}

impl RestaurantQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Back to an empty filter and `name-asc`
    pub fn reset(&mut self) {
        self.filter.clear();
        self.sort = SortKey::NameAsc;
    }

    /// Whether anything differs from the defaults (drives "Clear filters")
    pub fn is_filtered(&self) -> bool {
        !self.filter.is_empty() || self.sort != SortKey::NameAsc
    }

    pub fn matches(&self, restaurant: &RestaurantSummary) -> bool {
        self.filter.is_empty()
            || restaurant
                .name
                .to_lowercase()
                .contains(&self.filter.to_lowercase())
    }

    /// Filtered and sorted copy of `restaurants`; the source is left untouched
    pub fn apply(&self, restaurants: &[RestaurantSummary]) -> Vec<RestaurantSummary> {
        let needle = self.filter.to_lowercase();
        let mut out: Vec<RestaurantSummary> = restaurants
            .iter()
            .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        // stable: equal keys keep their fetched order
        out.sort_by(|a, b| self.sort.compare(a, b));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RestaurantId;

    fn restaurant(id: u32, name: &str, rating: f64) -> RestaurantSummary {
        RestaurantSummary {
            id: RestaurantId::new(id).unwrap(),
            name: name.to_string(),
            short_description: format!("{name} description"),
            rating,
        }
    }

    fn sample() -> Vec<RestaurantSummary> {
        vec![
            restaurant(1, "Velvet & Vine", 4.7),
            restaurant(2, "Gourmet Kitchen", 4.2),
            restaurant(3, "Sushi Place", 4.9),
            restaurant(4, "Pasta Palace", 3.8),
            restaurant(5, "gourmet burgers", 4.2),
        ]
    }

    fn names(list: &[RestaurantSummary]) -> Vec<&str> {
        list.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_default_query_is_name_asc_without_filter() {
        let query = RestaurantQuery::new();
        assert_eq!(query.sort, SortKey::NameAsc);
        assert!(query.filter.is_empty());
        assert!(!query.is_filtered());

        let out = query.apply(&sample());
        assert_eq!(out.len(), 5);
        assert_eq!(
            names(&out),
            vec![
                "Gourmet Kitchen",
                "Pasta Palace",
                "Sushi Place",
                "Velvet & Vine",
                "gourmet burgers"
            ]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let query = RestaurantQuery::new().with_filter("GOURMET");
        let out = query.apply(&sample());
        assert_eq!(names(&out), vec!["Gourmet Kitchen", "gourmet burgers"]);
        assert!(query.is_filtered());
    }

    #[test]
    fn test_filter_matches_exactly_the_containing_names() {
        let list = sample();
        for filter in ["", "a", "PAL", "vine", "zzz", " "] {
            let query = RestaurantQuery::new().with_filter(filter);
            let out = query.apply(&list);
            let expected = list
                .iter()
                .filter(|r| r.name.to_lowercase().contains(&filter.to_lowercase()))
                .count();
            assert_eq!(out.len(), expected, "filter {filter:?}");
            assert!(out.iter().all(|r| query.matches(r)));
        }
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        let out = RestaurantQuery::new().with_filter("xyz").apply(&sample());
        assert!(out.is_empty());
    }

    #[test]
    fn test_rating_desc_is_non_increasing() {
        let out = RestaurantQuery::new()
            .sorted_by(SortKey::MaxRating)
            .apply(&sample());
        assert!(out.windows(2).all(|w| w[0].rating >= w[1].rating));
        assert_eq!(out[0].name, "Sushi Place");
    }

    #[test]
    fn test_rating_asc_is_non_decreasing() {
        let out = RestaurantQuery::new()
            .sorted_by(SortKey::MinRating)
            .apply(&sample());
        assert!(out.windows(2).all(|w| w[0].rating <= w[1].rating));
        assert_eq!(out[0].name, "Pasta Palace");
    }

    #[test]
    fn test_equal_ratings_keep_fetched_order() {
        let out = RestaurantQuery::new()
            .sorted_by(SortKey::MinRating)
            .apply(&sample());
        let tied: Vec<u32> = out
            .iter()
            .filter(|r| r.rating == 4.2)
            .map(|r| r.id.get())
            .collect();
        assert_eq!(tied, vec![2, 5]);
    }

    #[test]
    fn test_name_asc_and_desc_are_mirrors() {
        let asc = RestaurantQuery::new().apply(&sample());
        let desc = RestaurantQuery::new()
            .sorted_by(SortKey::NameDesc)
            .apply(&sample());
        assert!(asc.windows(2).all(|w| w[0].name <= w[1].name));
        assert!(desc.windows(2).all(|w| w[0].name >= w[1].name));

        let mut reversed = desc.clone();
        reversed.reverse();
        assert_eq!(names(&asc), names(&reversed));
    }

    #[test]
    fn test_nan_rating_does_not_panic() {
        let mut list = sample();
        list.push(restaurant(9, "Mystery", f64::NAN));
        let out = RestaurantQuery::new()
            .sorted_by(SortKey::MaxRating)
            .apply(&list);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut query = RestaurantQuery::new()
            .with_filter("sushi")
            .sorted_by(SortKey::MinRating);
        assert_eq!(query.apply(&sample()).len(), 1);

        query.reset();
        assert_eq!(query, RestaurantQuery::default());
        assert_eq!(query.filter, "");
        assert_eq!(query.sort, SortKey::NameAsc);
        assert_eq!(query.apply(&sample()).len(), 5);
    }

    #[test]
    fn test_sort_key_parse_and_display() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
            assert_eq!(key.to_string(), key.as_str());
        }
        assert_eq!("rating-desc".parse::<SortKey>().unwrap(), SortKey::MaxRating);
        assert_eq!("rating-asc".parse::<SortKey>().unwrap(), SortKey::MinRating);
        assert!(matches!(
            "oldest".parse::<SortKey>(),
            Err(ParseError::SortKey(k)) if k == "oldest"
        ));
        assert_eq!(SortKey::MaxRating.label(), "Max Rating");
    }

    #[test]
    fn test_sort_key_serde_values() {
        let json = serde_json::to_string(&SortKey::MaxRating).unwrap();
        assert_eq!(json, "\"max-rating\"");
        let key: SortKey = serde_json::from_str("\"rating-asc\"").unwrap();
        assert_eq!(key, SortKey::MinRating);
    }
}
