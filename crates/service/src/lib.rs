//! Service layer owning the business rules for user records.
//! - Validation, create-time email uniqueness, existence checks.
//! - Persistence goes through the `RecordRepository` port; adapters for
//!   SeaORM and an in-process map are provided.
//! - Business rejections are explicit `ServiceError` variants.

pub mod errors;
pub mod record;
#[cfg(test)]
pub mod test_support;
