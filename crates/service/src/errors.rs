use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("duplicate email: {0}")]
    DuplicateEmail(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self { Self::NotFound(format!("{} with id {} not found", entity, id)) }

    pub fn duplicate_email(email: &str) -> Self { Self::DuplicateEmail(format!("email {} is already registered", email)) }

    /// Validation, duplicate and not-found failures are expected outcomes; `Db` is not.
    pub fn is_business(&self) -> bool {
        !matches!(self, ServiceError::Db(_))
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::DuplicateEmail(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        ServiceError::Db(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_kinds_are_distinguished_from_db() {
        assert!(ServiceError::Validation("name".into()).is_business());
        assert!(ServiceError::duplicate_email("a@b.com").is_business());
        assert!(ServiceError::not_found("record", 7).is_business());
        assert!(!ServiceError::Db("connection refused".into()).is_business());
    }

    #[test]
    fn messages_and_codes() {
        let e = ServiceError::not_found("record", 99);
        assert_eq!(e.to_string(), "not found: record with id 99 not found");
        assert_eq!(e.code(), 1003);
        assert_eq!(ServiceError::duplicate_email("x@y.io").code(), 1002);
    }
}
