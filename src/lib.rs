pub mod auth;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod navigation;
pub mod places;
pub mod profile;
pub mod search;

pub use config::Settings;
pub use dashboard::Dashboard;
pub use models::{PlaceSelection, ProfileView, SearchCriteria};
