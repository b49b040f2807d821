use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Amenity checkboxes offered by the search form, in display order
pub const AVAILABLE_AMENITIES: [&str; 12] = [
    "Furnished",
    "WiFi",
    "Utilities Included",
    "On-Street Parking",
    "Driveway Parking",
    "Garage Parking",
    "Gym Access",
    "In-Unit Laundry",
    "Shared Laundry",
    "Air Conditioning",
    "Dishwasher",
    "Balcony",
];

/// Snapshot of every field in the search form
///
/// Prices are kept as the raw text typed into the form. An empty string
/// means the bound is unset. Nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub free_text_query: String,
    pub city: String,
    /// Two-letter state code
    pub state: String,
    pub price_min: String,
    pub price_max: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Selected amenities in the order they were checked
    pub amenities: Vec<String>,
}

/// City and state pulled out of a selected place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceSelection {
    pub city_name: Option<String>,
    pub state_code: Option<String>,
}

/// Profile data shown in the navigation bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileView {
    pub picture_url: Option<String>,
}

/// One entry of a place's `address_components`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn has_type(&self, kind: &str) -> bool {
        self.types.iter().any(|t| t == kind)
    }
}

/// Structured place returned when the user picks a suggestion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// Autocomplete suggestion for partially typed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub description: String,
    pub place_id: String,
}

/// Signed-in user as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Opaque id issued by the auth backend
    pub id: String,
}

impl UserIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
