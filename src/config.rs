use std::env;
use std::net::SocketAddr;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection url, e.g. `sqlite://countries.db`.
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub bind: SocketAddr,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Tracing filter directive, e.g. `info` or `country_names=debug`.
    pub level: String,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let environment = env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let config_file = match environment.as_str() {
            "production" => "prod",
            _ => "dev",
        };

        let s = config::Config::builder()
            .set_default("level", "info")?
            .set_default("database.url", "sqlite://countries.db")?
            .set_default("database.max_connections", 5)?
            .set_default("api.bind", "0.0.0.0:8000")?
            .add_source(File::with_name("config/default.yaml").required(false))
            .add_source(File::with_name(&format!("config/{}.yaml", config_file)).required(false))
            .add_source(File::with_name("config/local.yaml").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
