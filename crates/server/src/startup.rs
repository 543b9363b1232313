use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing::{info, warn};

use service::record::{
    repo::seaorm::SeaOrmRecordRepository, repository::memory::InMemoryRecordRepository, RecordRepository,
    RecordService,
};

use crate::routes;
use crate::state::ServerState;

/// Wire the storage adapter selected by `cfg.storage.backend` into a service.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let repo: Arc<dyn RecordRepository> = match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!(event = "storage_memory", "using in-memory storage; records are lost on restart");
            Arc::new(InMemoryRecordRepository::new())
        }
        StorageBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database).await.context("connect database")?;
            if cfg.database.run_migrations {
                migration::Migrator::up(&db, None).await.context("apply migrations")?;
                info!(event = "migrations_applied", "database schema up to date");
            }
            Arc::new(SeaOrmRecordRepository::new(db))
        }
    };
    Ok(ServerState::new(RecordService::new(repo)))
}

pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let state = build_state(cfg).await?;
    Ok(routes::build_router(state, routes::build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Serve `app` on an already bound listener until Ctrl+C.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

/// Build the app from an already normalised config and run the HTTP server.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await.with_context(|| format!("bind {addr}"))?;
    info!(%addr, backend = ?cfg.storage.backend, "starting record server");
    serve(listener, app).await
}

/// Public entry: config file (or environment) and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_or_env()?;
    run_with_config(cfg).await
}
