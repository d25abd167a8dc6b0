//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, templates, and middleware.

pub mod dto;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod views;

pub use handlers::AdminAppState;
pub use middleware::{AdminGateState, CurrentAdmin, protect, require_admin_session};
pub use router::admin_router;
