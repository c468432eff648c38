use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bookfinder")]
#[command(about = "Search the Google Books catalog from the command line")]
pub struct CliConfig {
    /// Search keywords; several words are joined with spaces
    pub keywords: Vec<String>,

    /// Base volumes endpoint (no query string)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Output format: text, json or csv
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log format on stderr: text or json
    #[arg(long, default_value = "text")]
    pub log_format: String,

    /// Do not probe the endpoint host before searching
    #[arg(long)]
    pub skip_connectivity_check: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn query(&self) -> String {
        self.keywords.join(" ")
    }

    /// Loads the TOML file if one was given and applies flag overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let config = AppConfig::merge(
            file.as_ref(),
            self.endpoint.as_deref(),
            self.format.as_deref(),
        );
        config.validate()?;
        Ok(config)
    }
}
