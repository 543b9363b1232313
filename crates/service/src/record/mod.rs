//! User record module: domain, validation, storage port, adapters and service.

pub mod domain;
pub mod validation;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::Record;
pub use repository::RecordRepository;
pub use service::RecordService;
