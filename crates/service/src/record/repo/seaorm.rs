use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Set, Unchanged}, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use models::record;

use crate::errors::ServiceError;
use crate::record::domain::Record;
use crate::record::repository::RecordRepository;

fn db_err(e: DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}

/// SeaORM-backed repository implementation. Natural order is ascending id.
pub struct SeaOrmRecordRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl RecordRepository for SeaOrmRecordRepository {
    async fn find_all(&self) -> Result<Vec<Record>, ServiceError> {
        let rows = record::Entity::find()
            .order_by_asc(record::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Record::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Record>, ServiceError> {
        let found = record::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(found.map(Record::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Record>, ServiceError> {
        let found = record::Entity::find()
            .filter(record::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(Record::from))
    }

    async fn save(&self, rec: Record) -> Result<Record, ServiceError> {
        match rec.id {
            None => {
                let am = record::ActiveModel { id: NotSet, name: Set(rec.name), email: Set(rec.email) };
                let inserted = am.insert(&self.db).await.map_err(db_err)?;
                Ok(inserted.into())
            }
            Some(id) => {
                let am = record::ActiveModel { id: Unchanged(id), name: Set(rec.name), email: Set(rec.email) };
                match am.update(&self.db).await {
                    Ok(updated) => Ok(updated.into()),
                    Err(DbErr::RecordNotUpdated) => Err(ServiceError::not_found("record", id)),
                    Err(e) => Err(db_err(e)),
                }
            }
        }
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let n = record::Entity::find_by_id(id).count(&self.db).await.map_err(db_err)?;
        Ok(n > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        record::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
