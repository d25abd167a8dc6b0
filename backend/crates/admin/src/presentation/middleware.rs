//! Session Authorization Gate
//!
//! Middleware for protected routes. Every request re-resolves the session's
//! admin in the store; nothing is cached between requests.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};

use crate::application::CheckSessionUseCase;
use crate::application::config::AdminConfig;
use crate::domain::entity::admin::Admin;
use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::domain::value_object::{admin_id::AdminId, email::Email, person_name::PersonName};
use crate::presentation::router::LOGIN_PATH;

/// Middleware state
#[derive(Clone)]
pub struct AdminGateState<R>
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AdminConfig>,
}

impl<R> AdminGateState<R>
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AdminConfig>) -> Self {
        Self { repo, config }
    }
}

/// The verified admin, stored in request extensions by the gate
#[derive(Debug, Clone)]
pub struct CurrentAdmin {
    pub admin_id: AdminId,
    pub email: Email,
    pub first_name: PersonName,
    pub last_name: PersonName,
}

impl CurrentAdmin {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<Admin> for CurrentAdmin {
    fn from(admin: Admin) -> Self {
        Self {
            admin_id: admin.admin_id,
            email: admin.email,
            first_name: admin.first_name,
            last_name: admin.last_name,
        }
    }
}

/// Middleware that requires a valid admin session
///
/// Failures redirect to the login page with the reason as a flash message.
pub async fn require_admin_session<R>(
    State(state): State<AdminGateState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case =
        CheckSessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    match use_case.execute(token.as_deref()).await {
        Ok(admin) => {
            req.extensions_mut().insert(CurrentAdmin::from(admin));
            next.run(req).await
        }
        Err(e) => e.into_outcome(LOGIN_PATH).into_response(),
    }
}

/// Put every route of `router` behind the gate
pub fn protect<R>(router: Router, gate: AdminGateState<R>) -> Router
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(
        gate,
        require_admin_session::<R>,
    ))
}
