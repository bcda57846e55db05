pub mod content;
pub mod document;
pub mod http_fetcher;

pub use content::ContentFetcher;
pub use document::Document;
pub use http_fetcher::HttpFetcher;

use async_trait::async_trait;

use crate::app::Result;

#[async_trait]
pub trait Fetcher {
    /// GET the page and return its raw body.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
