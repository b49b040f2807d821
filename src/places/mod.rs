pub mod autocomplete;
pub mod google;
pub mod traits;

pub use autocomplete::{
    AddressAutocomplete, AutocompleteState, CityExtractor, ComponentExtractor, StateExtractor,
};
pub use google::GooglePlacesClient;
pub use traits::{PlaceRestriction, PlacesService};
