//! Infrastructure layer - External service implementations

pub mod asset;
pub mod auth;
pub mod logging;
pub mod record;
pub mod settings;
pub mod storage;
pub mod user;
