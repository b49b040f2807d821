use crate::models::{AddressComponent, Place, Suggestion};
use crate::places::traits::{PlaceRestriction, PlacesService};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    predictions: Vec<Suggestion>,
    status: String,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    result: Option<DetailsResult>,
    status: String,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResult {
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

/// Google Places web service client
pub struct GooglePlacesClient {
    api_key: String,
    base_url: String,
    timeout: Duration,
    client: OnceCell<Client>,
}

impl GooglePlacesClient {
    /// Create a client against the public Google endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_PLACES_BASE_URL)
    }

    /// Create a client against a custom endpoint
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
            client: OnceCell::new(),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn loaded(&self) -> Result<&Client> {
        self.client
            .get()
            .context("Places client used before it finished loading")
    }
}

fn check_status(status: &str, error_message: Option<&str>) -> Result<()> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => anyhow::bail!(
            "Places service returned {}: {}",
            other,
            error_message.unwrap_or("no details")
        ),
    }
}

#[async_trait]
impl PlacesService for GooglePlacesClient {
    async fn load(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("Places API key is blank");
        }

        self.client
            .get_or_try_init(|| async {
                info!("Loading Google Places client");
                Client::builder()
                    .timeout(self.timeout)
                    .build()
                    .context("Failed to create HTTP client")
            })
            .await?;

        Ok(())
    }

    async fn suggestions(
        &self,
        input: &str,
        restriction: PlaceRestriction,
    ) -> Result<Vec<Suggestion>> {
        let client = self.loaded()?;
        let url = format!("{}/autocomplete/json", self.base_url);
        let components = format!("country:{}", restriction.country());

        debug!("Fetching suggestions for {:?} ({})", input, restriction.place_type());

        let response = client
            .get(&url)
            .query(&[
                ("input", input),
                ("types", restriction.place_type()),
                ("components", components.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("Failed to fetch place suggestions")?;

        if !response.status().is_success() {
            warn!("Places autocomplete returned status: {}", response.status());
            anyhow::bail!("Failed to fetch place suggestions: {}", response.status());
        }

        let body: AutocompleteResponse = response
            .json()
            .await
            .context("Failed to parse autocomplete response")?;
        check_status(&body.status, body.error_message.as_deref())?;

        debug!("Got {} suggestions", body.predictions.len());
        Ok(body.predictions)
    }

    async fn place(&self, place_id: &str) -> Result<Place> {
        let client = self.loaded()?;
        let url = format!("{}/details/json", self.base_url);

        let response = client
            .get(&url)
            .query(&[
                ("place_id", place_id),
                ("fields", "address_component"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("Failed to fetch place details")?;

        if !response.status().is_success() {
            warn!("Places details returned status: {}", response.status());
            anyhow::bail!("Failed to fetch place details: {}", response.status());
        }

        let body: DetailsResponse = response
            .json()
            .await
            .context("Failed to parse place details response")?;
        check_status(&body.status, body.error_message.as_deref())?;

        Ok(Place {
            address_components: body
                .result
                .map(|r| r.address_components)
                .unwrap_or_default(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "Google Places"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_check() {
        assert!(check_status("OK", None).is_ok());
        assert!(check_status("ZERO_RESULTS", None).is_ok());
        let err = check_status("REQUEST_DENIED", Some("bad key")).unwrap_err();
        assert!(err.to_string().contains("bad key"));
    }

    #[tokio::test]
    async fn test_blank_key_fails_to_load() {
        let client = GooglePlacesClient::new("  ");
        assert!(client.load().await.is_err());
        assert!(client.suggestions("San", PlaceRestriction::Cities).await.is_err());
    }
}
