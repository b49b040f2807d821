use crate::models::{PlaceSelection, SearchCriteria};
use chrono::NaiveDate;
use tracing::debug;

/// Holds the live value of every search field
///
/// Starts empty, is mutated on each keystroke, toggle or place selection,
/// and hands out a read-only snapshot when the form is submitted.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    criteria: SearchCriteria,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, value: impl Into<String>) {
        self.criteria.free_text_query = value.into();
    }

    pub fn set_city(&mut self, value: impl Into<String>) {
        self.criteria.city = value.into();
    }

    pub fn set_state(&mut self, value: impl Into<String>) {
        self.criteria.state = value.into();
    }

    pub fn set_price_min(&mut self, value: impl Into<String>) {
        self.criteria.price_min = value.into();
    }

    pub fn set_price_max(&mut self, value: impl Into<String>) {
        self.criteria.price_max = value.into();
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.criteria.start_date = date;
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.criteria.end_date = date;
    }

    /// Check the amenity if it is unchecked, uncheck it otherwise
    ///
    /// Newly checked amenities go to the end so the selection order is kept.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        let amenities = &mut self.criteria.amenities;
        if let Some(pos) = amenities.iter().position(|a| a == amenity) {
            amenities.remove(pos);
        } else {
            amenities.push(amenity.to_string());
        }
    }

    pub fn is_amenity_selected(&self, amenity: &str) -> bool {
        self.criteria.amenities.iter().any(|a| a == amenity)
    }

    /// Fold an autocomplete result into the city and state fields
    ///
    /// A selection carrying a city overwrites both fields, blanking the state
    /// when the place had none. A state-only selection touches the state.
    pub fn apply_selection(&mut self, selection: PlaceSelection) {
        match selection {
            PlaceSelection {
                city_name: Some(city),
                state_code,
            } => {
                debug!("Autocomplete set city={} state={:?}", city, state_code);
                self.criteria.city = city;
                self.criteria.state = state_code.unwrap_or_default();
            }
            PlaceSelection {
                city_name: None,
                state_code: Some(state),
            } => {
                debug!("Autocomplete set state={}", state);
                self.criteria.state = state;
            }
            PlaceSelection {
                city_name: None,
                state_code: None,
            } => {}
        }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Copy of the current fields, taken at submit time
    pub fn snapshot(&self) -> SearchCriteria {
        self.criteria.clone()
    }
}
