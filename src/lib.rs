pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::console::{ConsolePresenter, OutputFormat};
pub use adapters::http::HttpFetcher;
pub use adapters::network::{AssumeConnected, TcpConnectivityCheck};
pub use config::AppConfig;
pub use crate::core::{engine::SearchEngine, task::SearchTask};
pub use domain::model::{BookRecord, SearchOutcome};
pub use utils::error::{BookFinderError, Result};
