use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::DatabaseConfig;

pub mod country;

pub type Db = SqlitePool;

/// Open a pool against an existing country database. The schema is never
/// created here.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Db> {
	use anyhow::Context as _;
	use std::str::FromStr as _;

	let options = SqliteConnectOptions::from_str(&config.url)
		.with_context(|| format!("invalid database url {}", config.url))?
		.read_only(true);

	SqlitePoolOptions::new()
		.max_connections(config.max_connections)
		.connect_with(options)
		.await
		.context("sqlite connect")
}
