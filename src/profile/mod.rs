pub mod fetcher;
pub mod http;
pub mod traits;

pub use fetcher::ProfileFetcher;
pub use http::HttpProfileApi;
pub use traits::ProfileApi;
