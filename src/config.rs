use crate::places::google::DEFAULT_PLACES_BASE_URL;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Runtime settings, read from the environment
#[derive(Debug, Clone)]
pub struct Settings {
    /// Places API key. Autocomplete is off without one.
    pub places_api_key: Option<String>,
    pub places_base_url: String,
    /// Base URL of the app serving `/api/user`
    pub api_base_url: String,
    pub http_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            places_api_key: None,
            places_base_url: DEFAULT_PLACES_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(30),
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    ///
    /// A `.env` file in the working directory is picked up first if present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let http_timeout = match lookup("SUBLET_HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .with_context(|| format!("Invalid SUBLET_HTTP_TIMEOUT_SECS: {}", raw))?,
            ),
            None => defaults.http_timeout,
        };

        Ok(Self {
            places_api_key: lookup("GOOGLE_MAPS_API_KEY").filter(|k| !k.trim().is_empty()),
            places_base_url: lookup("PLACES_API_BASE_URL").unwrap_or(defaults.places_base_url),
            api_base_url: lookup("SUBLET_API_BASE_URL").unwrap_or(defaults.api_base_url),
            http_timeout,
        })
    }
}
