//! Academic record repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{CollegeRecord, RecordDraft};
use crate::domain::DomainError;

/// Repository trait for college records. Column-mapped CRUD, no derived state.
#[async_trait]
pub trait RecordRepository: Send + Sync + Debug {
    /// List all records
    async fn list(&self) -> Result<Vec<CollegeRecord>, DomainError>;

    /// Insert a record, returning it with its assigned id
    async fn create(&self, draft: RecordDraft) -> Result<CollegeRecord, DomainError>;

    /// Overwrite the columns of an existing record
    async fn update(&self, id: i64, draft: RecordDraft) -> Result<CollegeRecord, DomainError>;

    /// Delete a record; returns false if no row matched
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
