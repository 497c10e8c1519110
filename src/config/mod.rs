use std::env;

use clap::Parser;

use crate::utils::validation::{validate_positive_number, validate_url, ConfigError, Validate};

/// Client CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "count-numbers")]
#[command(about = "Client for the number counting API")]
pub struct CliConfig {
    /// Base URL of the number counting service
    #[arg(long, default_value = "http://localhost:5000")]
    pub url: String,

    /// Comma-separated numbers to classify (one-shot mode; omit for interactive)
    #[arg(long)]
    pub numbers: Option<String>,

    /// Check service health and exit
    #[arg(long)]
    pub health: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_url("url", &self.url)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}

/// Server configuration, built once at startup and passed down explicitly.
/// Handlers never read the environment themselves.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            debug: false,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, and `DEBUG` from the environment, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            debug: env::var("DEBUG")
                .map(|s| s.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.debug),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
