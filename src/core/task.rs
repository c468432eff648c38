use crate::core::engine::SearchEngine;
use crate::domain::model::SearchOutcome;
use crate::domain::ports::{ConnectivityCheck, Fetcher, Presenter};
use crate::utils::error::{BookFinderError, Result};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// One background fetch-and-parse. Runs to completion once spawned; nothing
/// guards against several tasks running at the same time.
pub struct SearchTask {
    handle: JoinHandle<SearchOutcome>,
}

impl SearchTask {
    pub fn spawn<F, N>(engine: Arc<SearchEngine<F, N>>, url: String) -> Self
    where
        F: Fetcher + 'static,
        N: ConnectivityCheck + 'static,
    {
        let handle = tokio::spawn(async move { engine.fetch_and_parse(&url).await });
        Self { handle }
    }

    pub async fn outcome(self) -> Result<SearchOutcome> {
        self.handle
            .await
            .map_err(|e| BookFinderError::TaskError {
                message: e.to_string(),
            })
    }

    /// Waits for the task and hands its outcome to the presenter.
    pub async fn complete<P: Presenter>(self, presenter: &mut P) -> Result<SearchOutcome> {
        let outcome = self.outcome().await?;
        match &outcome {
            SearchOutcome::Books(books) => presenter.show_books(books)?,
            SearchOutcome::NoResults => presenter.show_no_results()?,
        }
        Ok(outcome)
    }
}
