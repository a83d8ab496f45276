//! CLI configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override what is loaded here.

use std::env;

use singa_api::{ApiConfig, ConfigError};
use singa_core::{CurrencyStyle, DocumentSettings, Language, DEFAULT_COMPANY_NAME};

/// Everything the commands need to know before they run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub documents: DocumentSettings,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api = ApiConfig::from_lookup(&lookup)?;

        let company_name = lookup("SINGA_COMPANY_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string());

        let language: Language = lookup("SINGA_DOCUMENT_LANGUAGE")
            .unwrap_or_else(|| "en".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SINGA_DOCUMENT_LANGUAGE".to_string()))?;

        let currency_style: CurrencyStyle = lookup("SINGA_CURRENCY_STYLE")
            .unwrap_or_else(|| "locale".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SINGA_CURRENCY_STYLE".to_string()))?;

        Ok(AppConfig {
            api,
            documents: DocumentSettings {
                company_name,
                language,
                currency_style,
            },
        })
    }
}
