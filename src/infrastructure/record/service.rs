//! Record service: plain CRUD over academic records

use std::sync::Arc;

use crate::domain::record::{CollegeRecord, RecordDraft, RecordRepository};
use crate::domain::DomainError;

/// Thin orchestration over the record repository. No business rules; every
/// storage failure passes through.
#[derive(Debug)]
pub struct RecordService {
    repository: Arc<dyn RecordRepository>,
}

impl RecordService {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<CollegeRecord>, DomainError> {
        self.repository.list().await
    }

    pub async fn create(&self, draft: RecordDraft) -> Result<CollegeRecord, DomainError> {
        self.repository.create(draft).await
    }

    pub async fn update(&self, id: i64, draft: RecordDraft) -> Result<CollegeRecord, DomainError> {
        self.repository.update(id, draft).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(format!("Record {} not found", id)));
        }
        Ok(())
    }
}
