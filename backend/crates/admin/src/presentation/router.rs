//! Admin Router

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::application::config::AdminConfig;
use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::presentation::handlers::{self, AdminAppState};

pub const LOGIN_PATH: &str = "/admin/login";
pub const SIGNUP_PATH: &str = "/admin/signup";
pub const LOGOUT_PATH: &str = "/admin/logout";
/// Landing page after a successful login
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Create the Admin router for any repository implementation
pub fn admin_router<R>(repo: Arc<R>, config: Arc<AdminConfig>) -> Router
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let state = AdminAppState { repo, config };

    Router::new()
        .route(
            LOGIN_PATH,
            get(handlers::login_page).post(handlers::login::<R>),
        )
        .route(
            SIGNUP_PATH,
            get(handlers::signup_page).post(handlers::signup::<R>),
        )
        .route(LOGOUT_PATH, get(handlers::logout::<R>))
        .with_state(state)
}
