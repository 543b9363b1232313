use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

/// Open a pooled connection using the pool/timeout settings from `cfg`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    cfg.validate().map_err(|e| ModelError::Config(e.to_string()))?;

    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opts).await?;
    info!(
        event = "db_connected",
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "database pool ready"
    );
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_memory() -> DatabaseConfig {
        DatabaseConfig { url: "sqlite::memory:".into(), min_connections: 1, max_connections: 1, ..Default::default() }
    }

    #[tokio::test]
    async fn connects_to_sqlite_memory() -> anyhow::Result<()> {
        let db = connect_with_config(&sqlite_memory()).await?;
        db.ping().await?;
        Ok(())
    }

    #[tokio::test]
    async fn rejects_invalid_config_before_connecting() {
        let cfg = DatabaseConfig { url: String::new(), ..Default::default() };
        assert!(matches!(connect_with_config(&cfg).await, Err(ModelError::Config(_))));
    }
}
