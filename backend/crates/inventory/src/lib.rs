//! Inventory Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Product entity, value objects, repository trait
//! - `application/` - Use cases and configuration
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, templates
//!
//! ## Features
//! - Add, view, edit and delete products
//! - Case-insensitive product name uniqueness
//! - Paginated dashboard (newest first) and sanitized search
//!
//! Every route is meant to sit behind `admin::presentation::protect`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::InventoryConfig;
pub use error::{ProductError, ProductResult};
pub use infra::{memory::InMemoryProductRepository, postgres::PgProductRepository};
pub use presentation::router::inventory_router;
