#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::console::SUPPORTED_FORMATS;
use crate::core::query::GOOGLE_BOOKS_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_url, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

/// Effective settings after merging defaults, the TOML file and flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoint: String,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: GOOGLE_BOOKS_ENDPOINT.to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Later sources win: defaults, then `file`, then explicit overrides.
    pub fn merge(
        file: Option<&TomlConfig>,
        endpoint: Option<&str>,
        format: Option<&str>,
    ) -> Self {
        let mut config = Self::default();

        if let Some(file) = file {
            if let Some(endpoint) = &file.source.endpoint {
                config.endpoint = endpoint.clone();
            }
            if let Some(format) = &file.output.format {
                config.format = format.clone();
            }
        }

        if let Some(endpoint) = endpoint {
            config.endpoint = endpoint.to_string();
        }
        if let Some(format) = format {
            config.format = format.to_string();
        }

        config
    }
}

impl ConfigProvider for AppConfig {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn output_format(&self) -> &str {
        &self.format
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_one_of("format", &self.format, SUPPORTED_FORMATS)?;
        Ok(())
    }
}
