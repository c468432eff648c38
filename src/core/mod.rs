pub mod engine;
pub mod parser;
pub mod query;
pub mod task;

pub use crate::domain::model::{BookRecord, SearchOutcome};
pub use crate::domain::ports::{ConfigProvider, ConnectivityCheck, Fetcher, Presenter};
pub use crate::utils::error::Result;
