//! Academic record domain

mod entity;
mod repository;

pub use entity::{CollegeRecord, RecordDraft};
pub use repository::RecordRepository;

#[cfg(test)]
pub use repository::mock::MockRecordRepository;
