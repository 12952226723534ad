//! HTTP client for the restaurant API

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{BookingForm, RestaurantDetail, RestaurantDetailsResponse, RestaurantId, RestaurantSummary};

/// Restaurant API surface consumed by the view controllers
///
/// One request per call: no retry, no caching, no de-duplication.
#[async_trait]
pub trait RestaurantApi: Send + Sync {
    /// `GET /restaurants`
    async fn list_restaurants(&self) -> ClientResult<Vec<RestaurantSummary>>;

    /// `GET /restaurants/{id}`, unwrapped from its `details` envelope
    async fn restaurant_details(&self, id: RestaurantId) -> ClientResult<RestaurantDetail>;

    /// `POST /bookings` with the raw form values as the JSON body
    async fn create_booking(&self, form: &BookingForm) -> ClientResult<()>;
}

/// HTTP client for making network requests to the restaurant API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body, discarding the response body
    pub async fn post<B: serde::Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        // .json() also sets Content-Type: application/json
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(Into::into)
    }
}

#[async_trait]
impl RestaurantApi for HttpClient {
    async fn list_restaurants(&self) -> ClientResult<Vec<RestaurantSummary>> {
        let restaurants: Vec<RestaurantSummary> = self.get("restaurants").await?;
        tracing::debug!(count = restaurants.len(), "Fetched restaurants");
        Ok(restaurants)
    }

    async fn restaurant_details(&self, id: RestaurantId) -> ClientResult<RestaurantDetail> {
        let response: RestaurantDetailsResponse = self.get(&format!("restaurants/{id}")).await?;
        response
            .details
            .ok_or_else(|| ClientError::InvalidResponse("Missing restaurant details".to_string()))
    }

    async fn create_booking(&self, form: &BookingForm) -> ClientResult<()> {
        self.post("bookings", form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:3001/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3001");
        assert_eq!(client.url("restaurants"), "http://localhost:3001/restaurants");
        assert_eq!(client.url("/restaurants/4"), "http://localhost:3001/restaurants/4");
    }

    #[test]
    fn test_rejects_bad_config() {
        let err = HttpClient::new(&ClientConfig::new("ftp://nope")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
