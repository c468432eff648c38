use crate::core::parser::parse_books;
use crate::core::query::build_search_url;
use crate::core::task::SearchTask;
use crate::domain::model::SearchOutcome;
use crate::domain::ports::{ConfigProvider, ConnectivityCheck, Fetcher, Presenter};
use crate::utils::error::{BookFinderError, Result};
use crate::utils::validation::validate_keywords;
use std::sync::Arc;

pub struct SearchEngine<F: Fetcher, N: ConnectivityCheck> {
    fetcher: F,
    connectivity: N,
    endpoint: String,
}

impl<F: Fetcher, N: ConnectivityCheck> SearchEngine<F, N> {
    pub fn new(fetcher: F, connectivity: N, endpoint: impl Into<String>) -> Self {
        Self {
            fetcher,
            connectivity,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, fetcher: F, connectivity: N) -> Self {
        Self::new(fetcher, connectivity, config.api_endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs the checks that happen before any request: connectivity first,
    /// then the keywords. Returns the request URL.
    pub async fn prepare(&self, keywords: &str) -> Result<String> {
        if !self.connectivity.is_connected().await {
            tracing::warn!("No network connection, search not started");
            return Err(BookFinderError::NetworkUnavailable {
                host: self.endpoint.clone(),
            });
        }

        validate_keywords(keywords)?;

        let url = build_search_url(&self.endpoint, keywords);
        tracing::debug!("Search URL: {}", url);
        Ok(url)
    }

    /// Fetch and parse collapse into one outcome: any failure is `NoResults`.
    pub async fn fetch_and_parse(&self, url: &str) -> SearchOutcome {
        let body = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Fetch failed: {} ({:?})", e, e.category());
                return SearchOutcome::NoResults;
            }
        };

        match parse_books(&body) {
            Ok(books) => {
                tracing::info!("Search returned {} books", books.len());
                SearchOutcome::Books(books)
            }
            Err(e) => {
                tracing::warn!("Could not parse search response: {}", e);
                SearchOutcome::NoResults
            }
        }
    }

    /// Pre-checks plus fetch and parse on the current task.
    pub async fn search(&self, keywords: &str) -> Result<SearchOutcome> {
        let url = self.prepare(keywords).await?;
        Ok(self.fetch_and_parse(&url).await)
    }
}

impl<F, N> SearchEngine<F, N>
where
    F: Fetcher + 'static,
    N: ConnectivityCheck + 'static,
{
    /// Full search cycle: pre-checks here, fetch and parse on a background
    /// task, then exactly one presenter call.
    ///
    /// Pre-check failures are reported to the presenter and returned as
    /// errors. Fetch and parse failures are not errors; they come back as
    /// `SearchOutcome::NoResults`.
    pub async fn run<P: Presenter>(
        self: Arc<Self>,
        keywords: &str,
        presenter: &mut P,
    ) -> Result<SearchOutcome> {
        let url = match self.prepare(keywords).await {
            Ok(url) => url,
            Err(e) => {
                match e {
                    BookFinderError::EmptyInput => presenter.show_empty_input()?,
                    BookFinderError::NetworkUnavailable { .. } => {
                        presenter.show_network_unavailable()?
                    }
                    _ => {}
                }
                return Err(e);
            }
        };

        SearchTask::spawn(self, url)
            .complete(presenter)
            .await
    }
}
