use crate::embedding::hugging_face::{DEFAULT_API_URL, DEFAULT_DIMENSIONS, DEFAULT_MODEL};
use std::env;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone)]
pub struct HuggingFaceConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub dimensions: usize,
}

impl fmt::Debug for HuggingFaceConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HuggingFaceConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

/// Where the seeded rows go.
#[derive(Clone, PartialEq)]
pub enum StoreConfig {
    /// Direct Postgres connection.
    Postgres { database_url: String },
    /// Hosted REST endpoint (PostgREST) authenticated with a service key.
    Rest { url: String, service_key: String },
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreConfig::Postgres { .. } => f
                .debug_struct("Postgres")
                .field("database_url", &"<redacted>")
                .finish(),
            StoreConfig::Rest { url, .. } => f
                .debug_struct("Rest")
                .field("url", url)
                .field("service_key", &"<redacted>")
                .finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub store: StoreConfig,
    pub embedding: HuggingFaceConfig,
}

impl SeedConfig {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let store = match lookup("DATABASE_URL") {
            Some(database_url) => StoreConfig::Postgres { database_url },
            None => StoreConfig::Rest {
                url: require("SUPABASE_URL")?,
                service_key: require("SUPABASE_SERVICE_KEY")?,
            },
        };

        let dimensions = match lookup("HF_DIMENSIONS") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(dimensions) if dimensions > 0 => dimensions,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "HF_DIMENSIONS",
                        value,
                    })
                }
            },
            None => DEFAULT_DIMENSIONS,
        };

        let embedding = HuggingFaceConfig {
            api_key: require("HF_API_KEY")?,
            api_url: lookup("HF_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: lookup("HF_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            dimensions,
        };

        Ok(SeedConfig { store, embedding })
    }
}
