use crate::api::traits::PropertySource;
use crate::models::{BookingRequest, Property};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Environment variable naming the backend base URL.
pub const BASE_URL_ENV: &str = "EXPATHOME_API_URL";

/// Default backend address for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// HTTP client for the rental marketplace backend.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client pointed at `EXPATHOME_API_URL`, falling back to
    /// the local development backend.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(&self, response: reqwest::Response, action: &str) -> Result<reqwest::Response> {
        if !response.status().is_success() {
            warn!("Backend returned status {} while {}", response.status(), action);
            anyhow::bail!("Failed {}: {}", action, response.status());
        }
        Ok(response)
    }

    /// Fetch the full property list.
    pub async fn properties(&self) -> Result<Vec<Property>> {
        let url = self.url("/properties");
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch properties")?;
        let response = self.check(response, "fetching properties").await?;
        response.json().await.context("Failed to decode property list")
    }

    /// Fetch a single property; `None` when the backend reports 404.
    pub async fn property(&self, id: u64) -> Result<Option<Property>> {
        let url = self.url(&format!("/properties/{}", id));
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch property")?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = self.check(response, "fetching property").await?;
        let property = response.json().await.context("Failed to decode property")?;
        Ok(Some(property))
    }

    /// Create a new listing (admin).
    pub async fn create_property(&self, property: &Property) -> Result<Property> {
        let url = self.url("/properties");
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(property)
            .send()
            .await
            .context("Failed to create property")?;
        let response = self.check(response, "creating property").await?;
        response.json().await.context("Failed to decode created property")
    }

    /// Full replace of an existing listing (admin).
    pub async fn update_property(&self, property: &Property) -> Result<Property> {
        let url = self.url(&format!("/properties/{}", property.id));
        debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .json(property)
            .send()
            .await
            .context("Failed to update property")?;
        let response = self.check(response, "updating property").await?;
        response.json().await.context("Failed to decode updated property")
    }

    /// Delete a listing (admin).
    pub async fn delete_property(&self, id: u64) -> Result<()> {
        let url = self.url(&format!("/properties/{}", id));
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to delete property")?;
        self.check(response, "deleting property").await?;
        Ok(())
    }

    /// Fetch all booking requests.
    pub async fn bookings(&self) -> Result<Vec<BookingRequest>> {
        let url = self.url("/bookings");
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch bookings")?;
        let response = self.check(response, "fetching bookings").await?;
        response.json().await.context("Failed to decode booking list")
    }

    /// Submit a booking request; returns the record with its assigned id.
    pub async fn create_booking(&self, booking: &BookingRequest) -> Result<BookingRequest> {
        let url = self.url("/bookings");
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(booking)
            .send()
            .await
            .context("Failed to create booking")?;
        let response = self.check(response, "creating booking").await?;
        response.json().await.context("Failed to decode created booking")
    }
}

#[async_trait]
impl PropertySource for ApiClient {
    async fn fetch_all(&self) -> Result<Vec<Property>> {
        self.properties().await
    }

    fn source_name(&self) -> &'static str {
        "expathome-backend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = ApiClient::with_base_url("https://api.example.com/").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.url("/properties/3"), "https://api.example.com/properties/3");
    }
}
