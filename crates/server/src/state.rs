use std::sync::Arc;

use service::record::{repository::memory::InMemoryRecordRepository, RecordService};

/// Shared handler state. Cloning is cheap: the service only holds an `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub records: RecordService,
}

impl ServerState {
    pub fn new(records: RecordService) -> Self {
        Self { records }
    }

    /// State over an empty in-process store.
    pub fn in_memory() -> Self {
        Self::new(RecordService::new(Arc::new(InMemoryRecordRepository::new())))
    }
}
