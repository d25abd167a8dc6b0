//! HTTP Handlers
//!
//! Every POST ends in an [`Outcome`]: a redirect plus a flash message.

use std::borrow::Cow;
use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::{HeaderMap, header};
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use kernel::error::app_error::AppError;
use kernel::outcome::Outcome;

use crate::application::config::AdminConfig;
use crate::application::{SignInUseCase, SignOutUseCase, SignUpUseCase};
use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::error::AdminError;
use crate::presentation::dto::{LoginForm, SignupForm};
use crate::presentation::flash::{render_page, take_flash};
use crate::presentation::router::{DASHBOARD_PATH, LOGIN_PATH, SIGNUP_PATH};
use crate::presentation::views::{LoginPage, SignupPage};

/// Shared state for admin handlers
#[derive(Clone)]
pub struct AdminAppState<R>
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AdminConfig>,
}

// ============================================================================
// Log In
// ============================================================================

/// GET /admin/login
pub async fn login_page(headers: HeaderMap) -> Response {
    let flash = take_flash(&headers);
    render_page(flash.is_some(), LoginPage::new(flash))
}

/// POST /admin/login
pub async fn login<R>(
    State(state): State<AdminAppState<R>>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => return rejected(rejection, LOGIN_PATH).into_response(),
    };
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    match use_case.execute(form.into()).await {
        Ok(output) => {
            let cookie = state
                .config
                .session_cookie()
                .build_set_cookie(&output.session_token);

            (
                AppendHeaders([(header::SET_COOKIE, cookie)]),
                Outcome::ok(
                    format!("Welcome back, {}.", output.first_name),
                    DASHBOARD_PATH,
                ),
            )
                .into_response()
        }
        Err(e) => e.into_outcome(LOGIN_PATH).into_response(),
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// GET /admin/signup
pub async fn signup_page(headers: HeaderMap) -> Response {
    let flash = take_flash(&headers);
    render_page(flash.is_some(), SignupPage::new(flash))
}

/// POST /admin/signup
pub async fn signup<R>(
    State(state): State<AdminAppState<R>>,
    form: Result<Form<SignupForm>, FormRejection>,
) -> Outcome
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => return rejected(rejection, SIGNUP_PATH),
    };
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    match use_case.execute(form.into()).await {
        Ok(_) => Outcome::created("Admin registration successful.", LOGIN_PATH),
        Err(e) => e.into_outcome(SIGNUP_PATH),
    }
}

/// Outcome for a form body the extractor could not read
fn rejected(rejection: FormRejection, redirect_to: impl Into<Cow<'static, str>>) -> Outcome {
    AdminError::from(AppError::from(rejection)).into_outcome(redirect_to)
}

// ============================================================================
// Log Out
// ============================================================================

/// GET /admin/logout
///
/// Always ends on the login page; a session that cannot be destroyed is only
/// logged.
pub async fn logout<R>(State(state): State<AdminAppState<R>>, headers: HeaderMap) -> Response
where
    R: AdminRepository + AdminSessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name)
    {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        if let Err(e) = use_case.execute(&token).await {
            tracing::warn!(error = %e, "Failed to destroy admin session");
        }
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    (
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Redirect::to(LOGIN_PATH),
    )
        .into_response()
}
