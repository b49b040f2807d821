pub mod form;
pub mod query;

pub use form::SearchForm;
pub use query::{ListingsQuery, LISTINGS_PATH};
