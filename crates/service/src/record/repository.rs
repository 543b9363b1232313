use async_trait::async_trait;

use super::domain::Record;
use crate::errors::ServiceError;

/// Storage port consumed by `RecordService`.
///
/// Adapters report their own failures as `ServiceError::Db`.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Record>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Record>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Record>, ServiceError>;
    /// Inserts when `record.id` is unset (assigning a fresh id), replaces the stored row otherwise.
    async fn save(&self, record: Record) -> Result<Record, ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

/// In-process repository backed by an ordered map.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Rows {
        by_id: BTreeMap<i64, Record>,
        last_id: i64,
    }

    /// Ids start at 1 and are never reused.
    #[derive(Default)]
    pub struct InMemoryRecordRepository {
        rows: Mutex<Rows>,
    }

    impl InMemoryRecordRepository {
        pub fn new() -> Self { Self::default() }

        fn rows(&self) -> Result<MutexGuard<'_, Rows>, ServiceError> {
            self.rows.lock().map_err(|_| ServiceError::Db("in-memory record store lock poisoned".into()))
        }
    }

    #[async_trait]
    impl RecordRepository for InMemoryRecordRepository {
        async fn find_all(&self) -> Result<Vec<Record>, ServiceError> {
            Ok(self.rows()?.by_id.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Record>, ServiceError> {
            Ok(self.rows()?.by_id.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Record>, ServiceError> {
            Ok(self.rows()?.by_id.values().find(|r| r.email == email).cloned())
        }

        async fn save(&self, mut record: Record) -> Result<Record, ServiceError> {
            let mut rows = self.rows()?;
            let id = match record.id {
                Some(id) => {
                    if !rows.by_id.contains_key(&id) {
                        return Err(ServiceError::not_found("record", id));
                    }
                    id
                }
                None => {
                    rows.last_id += 1;
                    rows.last_id
                }
            };
            record.id = Some(id);
            rows.by_id.insert(id, record.clone());
            Ok(record)
        }

        async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.rows()?.by_id.contains_key(&id))
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.rows()?.by_id.remove(&id);
            Ok(())
        }
    }

}
