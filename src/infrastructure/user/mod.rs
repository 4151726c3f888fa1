//! User infrastructure module
//!
//! Password hashing with Argon2, the PostgreSQL user repository, and the
//! auth service orchestrating registration and login.

mod password;
mod postgres_repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresUserRepository;
pub use service::{AuthService, LoginOutcome, RegisterRequest};
