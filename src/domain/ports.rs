use crate::domain::model::BookRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_format(&self) -> &str;
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Returns the full response body, or an error for any transport
    /// failure, timeout or non-200 status.
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[async_trait]
pub trait ConnectivityCheck: Send + Sync {
    async fn is_connected(&self) -> bool;
}

/// Receives the outcome of a search. Exactly one method is called per search.
pub trait Presenter {
    fn show_books(&mut self, books: &[BookRecord]) -> Result<()>;
    fn show_no_results(&mut self) -> Result<()>;
    fn show_network_unavailable(&mut self) -> Result<()>;
    fn show_empty_input(&mut self) -> Result<()>;
}
