use crate::models::{Place, Suggestion};
use anyhow::Result;
use async_trait::async_trait;

/// Kind of place an autocomplete input is limited to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceRestriction {
    /// US cities
    Cities,
    /// US states
    States,
}

impl PlaceRestriction {
    /// Value of the `types` filter sent to the lookup service
    pub fn place_type(&self) -> &'static str {
        match self {
            PlaceRestriction::Cities => "(cities)",
            PlaceRestriction::States => "administrative_area_level_1",
        }
    }

    pub fn country(&self) -> &'static str {
        "us"
    }
}

/// Places lookup client injected into whatever needs address autocomplete
#[async_trait]
pub trait PlacesService: Send + Sync {
    /// Prepare the client for lookups. Safe to call more than once.
    async fn load(&self) -> Result<()>;

    /// Suggestions for partially typed text
    async fn suggestions(&self, input: &str, restriction: PlaceRestriction)
        -> Result<Vec<Suggestion>>;

    /// Resolve a picked suggestion into its address components
    async fn place(&self, place_id: &str) -> Result<Place>;

    /// Name of the lookup provider, for logging
    fn provider_name(&self) -> &'static str;
}
