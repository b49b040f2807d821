use crate::profile::traits::ProfileApi;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct UserResponse {
    user: UserRecord,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    profile_picture: Option<String>,
}

/// Client for the app's `/api/user` endpoint
pub struct HttpProfileApi {
    client: Client,
    base_url: String,
}

impl HttpProfileApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    async fn profile_picture(&self, user_id: &str) -> Result<Option<String>> {
        let url = format!("{}/api/user", self.base_url);
        debug!("Fetching profile for user {}", user_id);

        let response = self
            .client
            .get(&url)
            .query(&[("supabaseId", user_id)])
            .send()
            .await
            .context("Failed to fetch user profile")?;

        if !response.status().is_success() {
            warn!("Profile endpoint returned status: {}", response.status());
            anyhow::bail!("Failed to fetch user profile: {}", response.status());
        }

        let body: UserResponse = response
            .json()
            .await
            .context("Failed to parse user profile response")?;

        Ok(body.user.profile_picture.filter(|p| !p.is_empty()))
    }
}
