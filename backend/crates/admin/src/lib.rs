//! Admin Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, templates, middleware
//!
//! ## Features
//! - Admin signup/login with email + password
//! - Server-side sessions with signed cookie tokens
//! - Session authorization gate for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Session cookie is HttpOnly and HMAC-signed
//! - The gate re-reads the admin on every request

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AdminConfig;
pub use error::{AdminError, AdminResult};
pub use infra::{memory::InMemoryAdminRepository, postgres::PgAdminRepository};
pub use presentation::router::admin_router;

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
