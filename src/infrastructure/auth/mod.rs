//! Authentication infrastructure module
//!
//! JWT token management for session assertions.

mod jwt;

pub use jwt::{JwtClaims, JwtConfig, JwtService};
