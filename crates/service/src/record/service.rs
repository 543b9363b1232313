use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::domain::Record;
use super::repository::RecordRepository;
use super::validation;
use crate::errors::ServiceError;

/// Application service owning the record business rules.
///
/// The storage port is handed in explicitly; the service itself keeps no
/// state besides it. The duplicate-email check on create is a read followed
/// by a write and is not atomic: two concurrent creates with the same email
/// can both pass it unless storage enforces uniqueness.
pub struct RecordService<R: RecordRepository + ?Sized = dyn RecordRepository> {
    repo: Arc<R>,
}

impl<R: RecordRepository + ?Sized> Clone for RecordService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: RecordRepository + ?Sized> RecordService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All persisted records in storage order.
    pub async fn list(&self) -> Result<Vec<Record>, ServiceError> {
        self.repo.find_all().await
    }

    /// `Ok(None)` when no record carries `id`.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Record>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Validate, reject already-registered emails, then persist with a fresh id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::record::{Record, RecordService, repository::memory::InMemoryRecordRepository};
    /// let svc = RecordService::new(Arc::new(InMemoryRecordRepository::new()));
    /// let created = tokio_test::block_on(svc.create(Record::new("Ana", "ana@example.com"))).unwrap();
    /// assert_eq!(created.id, Some(1));
    /// let dup = tokio_test::block_on(svc.create(Record::new("Other", "ana@example.com")));
    /// assert!(dup.is_err());
    /// ```
    #[instrument(skip(self, candidate), fields(email = %candidate.email))]
    pub async fn create(&self, mut candidate: Record) -> Result<Record, ServiceError> {
        // callers never choose the id of a new record
        candidate.id = None;
        if let Err(e) = validation::validate(&candidate) {
            info!(event = "record_rejected", reason = %e, "create rejected by validation");
            return Err(e);
        }
        if let Some(existing) = self.repo.find_by_email(&candidate.email).await? {
            warn!(event = "record_rejected", existing_id = ?existing.id, "create rejected: email already registered");
            return Err(ServiceError::duplicate_email(&candidate.email));
        }
        let created = self.repo.save(candidate).await?;
        info!(event = "record_created", id = ?created.id, "record created");
        Ok(created)
    }

    /// Replace name and email of an existing record.
    ///
    /// Email uniqueness is not re-checked here, so an update may reuse the
    /// email of another record.
    #[instrument(skip(self, candidate))]
    pub async fn update(&self, id: i64, mut candidate: Record) -> Result<Record, ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            info!(event = "record_missing", "update target not found");
            return Err(ServiceError::not_found("record", id));
        }
        if let Err(e) = validation::validate(&candidate) {
            info!(event = "record_rejected", reason = %e, "update rejected by validation");
            return Err(e);
        }
        candidate.id = Some(id);
        let updated = self.repo.save(candidate).await?;
        info!(event = "record_updated", "record updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            info!(event = "record_missing", "delete target not found");
            return Err(ServiceError::not_found("record", id));
        }
        self.repo.delete_by_id(id).await?;
        info!(event = "record_deleted", "record deleted");
        Ok(())
    }
}
