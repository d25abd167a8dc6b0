//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAdminRepository;
pub use postgres::PgAdminRepository;
