use crate::models::{AddressComponent, Place, PlaceSelection, Suggestion};
use crate::places::traits::{PlaceRestriction, PlacesService};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const LOCALITY: &str = "locality";
const ADMIN_AREA_LEVEL_1: &str = "administrative_area_level_1";

/// Rule for turning a place's address components into a selection
pub trait ComponentExtractor: Send + Sync {
    /// Kind of place the bound input looks up
    fn restriction(&self) -> PlaceRestriction;

    /// `None` means the place carried nothing this input cares about
    fn extract(&self, components: &[AddressComponent]) -> Option<PlaceSelection>;
}

/// Pulls the locality and its state out of a city selection
///
/// When several components match, the last one wins. A city without a
/// state component still produces a selection, with no state code.
#[derive(Debug, Clone, Copy, Default)]
pub struct CityExtractor;

impl ComponentExtractor for CityExtractor {
    fn restriction(&self) -> PlaceRestriction {
        PlaceRestriction::Cities
    }

    fn extract(&self, components: &[AddressComponent]) -> Option<PlaceSelection> {
        let mut city_name = None;
        let mut state_code = None;

        for component in components {
            if component.has_type(LOCALITY) {
                city_name = Some(component.long_name.clone());
            }
            if component.has_type(ADMIN_AREA_LEVEL_1) {
                state_code = Some(component.short_name.clone());
            }
        }

        let city_name = city_name.filter(|c| !c.is_empty())?;
        Some(PlaceSelection {
            city_name: Some(city_name),
            state_code: state_code.filter(|s| !s.is_empty()),
        })
    }
}

/// Pulls the short state code out of a state selection, first match only
#[derive(Debug, Clone, Copy, Default)]
pub struct StateExtractor;

impl ComponentExtractor for StateExtractor {
    fn restriction(&self) -> PlaceRestriction {
        PlaceRestriction::States
    }

    fn extract(&self, components: &[AddressComponent]) -> Option<PlaceSelection> {
        let state = components.iter().find(|c| c.has_type(ADMIN_AREA_LEVEL_1))?;
        if state.short_name.is_empty() {
            return None;
        }
        Some(PlaceSelection {
            city_name: None,
            state_code: Some(state.short_name.clone()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompleteState {
    Uninitialized,
    Loading,
    Ready,
    /// Loading failed; autocomplete stays off for the rest of the session
    Failed,
}

/// Autocomplete bound to one text input
///
/// Plain typing into the input keeps working in every state; this only adds
/// suggestions and place selection once the lookup client is ready.
pub struct AddressAutocomplete<E> {
    extractor: E,
    state: AutocompleteState,
    mounted: bool,
    service: Option<Arc<dyn PlacesService>>,
}

impl<E: ComponentExtractor> AddressAutocomplete<E> {
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            state: AutocompleteState::Uninitialized,
            mounted: false,
            service: None,
        }
    }

    pub fn state(&self) -> AutocompleteState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == AutocompleteState::Ready
    }

    pub fn restriction(&self) -> PlaceRestriction {
        self.extractor.restriction()
    }

    /// Attach to the lookup client. Only the first call has any effect.
    ///
    /// Without a client (no API key configured) the adapter stays
    /// uninitialized. Load failures are logged and never retried.
    pub async fn mount(&mut self, service: Option<Arc<dyn PlacesService>>) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let Some(service) = service else {
            debug!(
                "No places client configured, {:?} autocomplete disabled",
                self.restriction()
            );
            return;
        };

        self.state = AutocompleteState::Loading;
        match service.load().await {
            Ok(()) => {
                info!(
                    "{} autocomplete ready for {:?}",
                    service.provider_name(),
                    self.restriction()
                );
                self.service = Some(service);
                self.state = AutocompleteState::Ready;
            }
            Err(e) => {
                error!("Error loading places client for autocomplete: {:#}", e);
                self.state = AutocompleteState::Failed;
            }
        }
    }

    /// Suggestions for the text typed so far, empty unless ready
    pub async fn suggestions(&self, input: &str) -> Vec<Suggestion> {
        let Some(service) = self.ready_service() else {
            return Vec::new();
        };

        match service.suggestions(input, self.restriction()).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                warn!("Place suggestions failed for {:?}: {:#}", input, e);
                Vec::new()
            }
        }
    }

    /// Handle a place picked from the suggestion list
    pub fn on_place_changed(&self, place: &Place) -> Option<PlaceSelection> {
        if !self.is_ready() {
            return None;
        }
        let selection = self.extractor.extract(&place.address_components);
        if selection.is_none() {
            debug!("Selected place had no usable address components");
        }
        selection
    }

    /// Resolve a suggestion into a place and extract from it
    pub async fn select(&self, suggestion: &Suggestion) -> Option<PlaceSelection> {
        let service = self.ready_service()?;

        match service.place(&suggestion.place_id).await {
            Ok(place) => self.on_place_changed(&place),
            Err(e) => {
                warn!("Place lookup failed for {}: {:#}", suggestion.place_id, e);
                None
            }
        }
    }

    fn ready_service(&self) -> Option<&Arc<dyn PlacesService>> {
        if self.is_ready() {
            self.service.as_ref()
        } else {
            None
        }
    }
}
