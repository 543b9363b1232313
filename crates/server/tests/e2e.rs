use std::net::SocketAddr;

use configs::{AppConfig, DatabaseConfig, StorageBackend};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server(cfg: AppConfig) -> anyhow::Result<TestApp> {
    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn memory_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.storage.backend = StorageBackend::Memory;
    cfg
}

fn sqlite_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.storage.backend = StorageBackend::Database;
    cfg.database = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    cfg
}

async fn scenario(app: &TestApp) -> anyhow::Result<()> {
    let c = reqwest::Client::new();
    let records = format!("{}/records", app.base_url);

    let res = c.post(&records).json(&json!({"name": "João", "email": "joao@example.com"})).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await?;
    let id = created["id"].as_i64().expect("numeric id");
    assert_eq!(created["name"], "João");

    let res = c.get(format!("{records}/{id}")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    let res = c.post(&records).json(&json!({"name": "João", "email": "joao@example.com"})).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = c
        .put(format!("{records}/{id}"))
        .json(&json!({"name": "João Atualizado", "email": "joao2@example.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"id": id, "name": "João Atualizado", "email": "joao2@example.com"}));

    let res = c.delete(format!("{records}/{id}")).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await?.is_empty());

    let res = c.get(format!("{records}/{id}")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = c.get(&records).send().await?;
    assert_eq!(res.json::<Value>().await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server(memory_config()).await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_scenario_in_memory() -> anyhow::Result<()> {
    let app = start_server(memory_config()).await?;
    scenario(&app).await
}

#[tokio::test]
async fn e2e_scenario_sqlite() -> anyhow::Result<()> {
    let app = start_server(sqlite_config()).await?;
    scenario(&app).await
}

#[tokio::test]
async fn e2e_database_backend_without_url_fails_to_start() {
    let mut cfg = AppConfig::default();
    cfg.storage.backend = StorageBackend::Database;
    assert!(server::startup::build_app(&cfg).await.is_err());
}
