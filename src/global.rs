use std::sync::Arc;

use anyhow::Context as _;

use crate::config::Config;
use crate::database::{self, country, Db};

pub struct Global {
    pub config: Config,
    pub db: Db,
    pub started_at: std::time::Instant,
}

impl Global {
    pub async fn init(config: Config) -> anyhow::Result<Arc<Self>> {
        let db = database::connect(&config.database).await?;

        tracing::info!(url = %config.database.url, "connected to database");

        let rows = country::count(&db)
            .await
            .with_context(|| format!("reading table {}", country::TABLE))?;

        tracing::info!(rows, "countries table ready");

        Ok(Self::new(config, db))
    }

    pub fn new(config: Config, db: Db) -> Arc<Self> {
        Arc::new(Self {
            config,
            db,
            started_at: std::time::Instant::now(),
        })
    }
}
