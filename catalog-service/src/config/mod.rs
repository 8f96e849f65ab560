use serde::Deserialize;
use service_core::config as core_config;
use service_core::config::{get_env, is_prod};
use service_core::error::AppError;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthConfig {
    /// Time budget for a liveness probe, in milliseconds.
    pub budget_ms: u64,
}

impl HealthConfig {
    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }
}

impl CatalogConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the APP__ prefix.
        let common = core_config::Config::load()?;
        let is_prod = is_prod();

        Ok(CatalogConfig {
            common,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("catalog_db"), is_prod)?,
            },
            health: HealthConfig {
                budget_ms: get_env("HEALTH_CHECK_BUDGET_MS", Some("1000"), is_prod)?
                    .parse()
                    .map_err(|e: std::num::ParseIntError| {
                        AppError::ConfigError(anyhow::anyhow!(
                            "invalid HEALTH_CHECK_BUDGET_MS: {}",
                            e
                        ))
                    })?,
            },
        })
    }
}
