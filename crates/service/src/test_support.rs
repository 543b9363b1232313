use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::record::domain::Record;
use crate::record::repository::RecordRepository;

/// Fresh, migrated in-memory SQLite database. A single pooled connection keeps
/// the schema alive for the lifetime of the handle.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Wraps a repository and counts calls that reach `save` / `delete_by_id`.
pub struct CountingRepository<R> {
    inner: R,
    saves: AtomicUsize,
    deletes: AtomicUsize,
}

impl<R: RecordRepository> CountingRepository<R> {
    pub fn new(inner: R) -> Arc<Self> {
        Arc::new(Self { inner, saves: AtomicUsize::new(0), deletes: AtomicUsize::new(0) })
    }

    pub fn saves(&self) -> usize { self.saves.load(Ordering::SeqCst) }

    pub fn deletes(&self) -> usize { self.deletes.load(Ordering::SeqCst) }
}

#[async_trait]
impl<R: RecordRepository> RecordRepository for CountingRepository<R> {
    async fn find_all(&self) -> Result<Vec<Record>, ServiceError> { self.inner.find_all().await }

    async fn find_by_id(&self, id: i64) -> Result<Option<Record>, ServiceError> { self.inner.find_by_id(id).await }

    async fn find_by_email(&self, email: &str) -> Result<Option<Record>, ServiceError> { self.inner.find_by_email(email).await }

    async fn save(&self, record: Record) -> Result<Record, ServiceError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(record).await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> { self.inner.exists_by_id(id).await }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_by_id(id).await
    }
}

/// A repository whose every call fails, standing in for an unreachable database.
pub struct UnreachableRepository;

#[async_trait]
impl RecordRepository for UnreachableRepository {
    async fn find_all(&self) -> Result<Vec<Record>, ServiceError> { Err(unreachable_db()) }
    async fn find_by_id(&self, _id: i64) -> Result<Option<Record>, ServiceError> { Err(unreachable_db()) }
    async fn find_by_email(&self, _email: &str) -> Result<Option<Record>, ServiceError> { Err(unreachable_db()) }
    async fn save(&self, _record: Record) -> Result<Record, ServiceError> { Err(unreachable_db()) }
    async fn exists_by_id(&self, _id: i64) -> Result<bool, ServiceError> { Err(unreachable_db()) }
    async fn delete_by_id(&self, _id: i64) -> Result<(), ServiceError> { Err(unreachable_db()) }
}

fn unreachable_db() -> ServiceError {
    ServiceError::Db("connection refused".into())
}
