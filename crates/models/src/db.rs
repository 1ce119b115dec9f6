use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Connect with explicit pool settings.
///
/// An in-memory SQLite URL is pinned to a single connection: every SQLite
/// memory connection is a separate, empty database.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let (max, min) = if cfg.is_sqlite_memory() {
        (1, 1)
    } else {
        (cfg.max_connections, cfg.min_connections)
    };

    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(max)
        .min_connections(min)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if !cfg.is_sqlite_memory() {
        opts.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }

    let db = Database::connect(opts).await?;
    info!(max_connections = max, min_connections = min, backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

/// Fresh in-memory SQLite database, used by tests and local experiments.
pub async fn connect_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".to_string(), ..DatabaseConfig::default() };
    connect_with_config(&cfg).await
}
