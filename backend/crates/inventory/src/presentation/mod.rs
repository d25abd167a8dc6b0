//! Presentation Layer
//!
//! HTTP handlers, DTOs, router and templates. Every route here expects the
//! admin session gate in front of it.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod views;

pub use handlers::InventoryAppState;
pub use router::inventory_router;
