//! User domain
//!
//! Domain types and traits for account registration and login.

mod entity;
mod repository;

pub use entity::User;
pub use repository::UserRepository;

#[cfg(test)]
pub use repository::mock::MockUserRepository;
