use crate::auth::AuthProvider;
use crate::config::Settings;
use crate::models::{Place, Suggestion, UserIdentity};
use crate::navigation::{NavAction, Navigator};
use crate::places::{
    AddressAutocomplete, CityExtractor, GooglePlacesClient, PlacesService, StateExtractor,
};
use crate::profile::{HttpProfileApi, ProfileApi, ProfileFetcher};
use crate::search::{ListingsQuery, SearchForm};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

/// Search dashboard: form state, address autocomplete, profile picture and
/// the navigation that ties them together
///
/// Every handler runs to completion before the next one is called, so the
/// dashboard is driven through `&mut self` with no locking.
pub struct Dashboard<N> {
    form: SearchForm,
    city_autocomplete: AddressAutocomplete<CityExtractor>,
    state_autocomplete: AddressAutocomplete<StateExtractor>,
    places: Option<Arc<dyn PlacesService>>,
    profile: ProfileFetcher,
    auth: Arc<dyn AuthProvider>,
    user: Option<UserIdentity>,
    navigator: N,
}

impl<N: Navigator> Dashboard<N> {
    pub fn new(
        navigator: N,
        profile_api: Arc<dyn ProfileApi>,
        auth: Arc<dyn AuthProvider>,
        places: Option<Arc<dyn PlacesService>>,
    ) -> Self {
        Self {
            form: SearchForm::new(),
            city_autocomplete: AddressAutocomplete::new(CityExtractor),
            state_autocomplete: AddressAutocomplete::new(StateExtractor),
            places,
            profile: ProfileFetcher::new(profile_api),
            auth,
            user: None,
            navigator,
        }
    }

    /// Build the HTTP collaborators described by `settings`
    pub fn from_settings(
        settings: &Settings,
        navigator: N,
        auth: Arc<dyn AuthProvider>,
    ) -> Result<Self> {
        let profile_api =
            HttpProfileApi::with_timeout(&settings.api_base_url, settings.http_timeout)?;

        let places = settings.places_api_key.as_ref().map(|key| {
            let client = GooglePlacesClient::with_base_url(key, &settings.places_base_url)
                .timeout(settings.http_timeout);
            Arc::new(client) as Arc<dyn PlacesService>
        });

        Ok(Self::new(navigator, Arc::new(profile_api), auth, places))
    }

    /// Page mount: bring up both autocomplete inputs
    pub async fn mount(&mut self) {
        self.city_autocomplete.mount(self.places.clone()).await;
        self.state_autocomplete.mount(self.places.clone()).await;
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    /// Direct access for keystrokes, toggles and date picks
    pub fn form_mut(&mut self) -> &mut SearchForm {
        &mut self.form
    }

    pub fn city_autocomplete(&self) -> &AddressAutocomplete<CityExtractor> {
        &self.city_autocomplete
    }

    pub fn state_autocomplete(&self) -> &AddressAutocomplete<StateExtractor> {
        &self.state_autocomplete
    }

    pub async fn city_suggestions(&self, input: &str) -> Vec<Suggestion> {
        self.city_autocomplete.suggestions(input).await
    }

    pub async fn state_suggestions(&self, input: &str) -> Vec<Suggestion> {
        self.state_autocomplete.suggestions(input).await
    }

    pub fn on_city_place_changed(&mut self, place: &Place) {
        if let Some(selection) = self.city_autocomplete.on_place_changed(place) {
            self.form.apply_selection(selection);
        }
    }

    pub fn on_state_place_changed(&mut self, place: &Place) {
        if let Some(selection) = self.state_autocomplete.on_place_changed(place) {
            self.form.apply_selection(selection);
        }
    }

    pub async fn select_city(&mut self, suggestion: &Suggestion) {
        if let Some(selection) = self.city_autocomplete.select(suggestion).await {
            self.form.apply_selection(selection);
        }
    }

    pub async fn select_state(&mut self, suggestion: &Suggestion) {
        if let Some(selection) = self.state_autocomplete.select(suggestion).await {
            self.form.apply_selection(selection);
        }
    }

    /// Submit the form and navigate to the results page
    ///
    /// Returns the navigation target that was pushed.
    pub fn submit(&mut self) -> String {
        let query = ListingsQuery::from(&self.form.snapshot());
        let target = query.target();
        info!("Searching listings with {} filters", query.pairs().len());
        self.navigator.push(&target);
        target
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    /// Auth state changed; refetch the profile when the identity differs
    pub async fn set_user(&mut self, user: Option<UserIdentity>) {
        if self.user == user {
            return;
        }
        self.user = user;
        self.profile.on_identity_change(self.user.as_ref()).await;
    }

    /// Picture shown in the navigation bar, only while signed in
    pub fn profile_picture(&self) -> Option<&str> {
        self.user.as_ref()?;
        self.profile.view().picture_url.as_deref()
    }

    pub fn navigate(&mut self, action: NavAction) {
        let route = action.route(self.user.is_some());
        self.navigator.push(route);
    }

    /// Sign out, forget the identity and return to the landing page
    ///
    /// Failures are logged and leave the user signed in on this page.
    pub async fn sign_out(&mut self) {
        match self.auth.sign_out().await {
            Ok(()) => {
                self.set_user(None).await;
                self.navigator.push("/");
            }
            Err(e) => error!("Error signing out: {:#}", e),
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}
