//! Record infrastructure module

mod postgres_repository;
mod service;

pub use postgres_repository::PostgresRecordRepository;
pub use service::RecordService;
