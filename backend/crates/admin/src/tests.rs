//! Use case and router tests for the admin crate

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use platform::password::HashParams;

    use crate::application::{SignUpInput, SignUpUseCase, config::AdminConfig};
    use crate::domain::entity::admin::Admin;
    use crate::domain::repository::AdminRepository;
    use crate::domain::value_object::{admin_id::AdminId, email::Email};
    use crate::error::{AdminError, AdminResult};
    use crate::infra::memory::InMemoryAdminRepository;

    pub const EMAIL: &str = "ada@example.com";
    pub const PASSWORD: &str = "analytical-engine";

    pub fn config() -> Arc<AdminConfig> {
        Arc::new(AdminConfig {
            hash_params: HashParams::insecure_fast(),
            ..AdminConfig::development()
        })
    }

    pub fn signup_input(email: &str, password: &str, confirmation: &str) -> SignUpInput {
        SignUpInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            password_confirmation: confirmation.to_string(),
        }
    }

    pub async fn register(
        repo: &Arc<InMemoryAdminRepository>,
        config: &Arc<AdminConfig>,
    ) -> AdminId {
        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(signup_input(EMAIL, PASSWORD, PASSWORD))
            .await
            .unwrap()
            .admin_id
    }

    /// Store whose existence check always misses, as if another request
    /// registered the same email in between check and insert
    #[derive(Clone, Default)]
    pub struct RacingAdminRepository {
        pub inner: InMemoryAdminRepository,
    }

    impl AdminRepository for RacingAdminRepository {
        async fn create(&self, admin: &Admin) -> AdminResult<()> {
            AdminRepository::create(&self.inner, admin).await
        }

        async fn find_by_id(&self, admin_id: &AdminId) -> AdminResult<Option<Admin>> {
            AdminRepository::find_by_id(&self.inner, admin_id).await
        }

        async fn find_by_email(&self, email: &Email) -> AdminResult<Option<Admin>> {
            self.inner.find_by_email(email).await
        }

        async fn exists_by_email(&self, _email: &Email) -> AdminResult<bool> {
            Ok(false)
        }
    }

    /// Store that is down
    #[derive(Clone, Default)]
    pub struct FailingAdminRepository;

    impl AdminRepository for FailingAdminRepository {
        async fn create(&self, _admin: &Admin) -> AdminResult<()> {
            Err(AdminError::Internal("store unavailable".into()))
        }

        async fn find_by_id(&self, _admin_id: &AdminId) -> AdminResult<Option<Admin>> {
            Err(AdminError::Internal("store unavailable".into()))
        }

        async fn find_by_email(&self, _email: &Email) -> AdminResult<Option<Admin>> {
            Err(AdminError::Internal("store unavailable".into()))
        }

        async fn exists_by_email(&self, _email: &Email) -> AdminResult<bool> {
            Err(AdminError::Internal("store unavailable".into()))
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};

    use super::support::*;
    use crate::application::{
        CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase, SignUpUseCase,
        session_token,
    };
    use crate::domain::entity::admin_session::AdminSession;
    use crate::domain::repository::{AdminRepository, AdminSessionRepository};
    use crate::error::AdminError;
    use crate::infra::memory::InMemoryAdminRepository;

    fn sign_in_input(email: &str, password: &str) -> SignInInput {
        SignInInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_stores_hash_not_password() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let config = config();
        let admin_id = register(&repo, &config).await;

        let admin = AdminRepository::find_by_id(repo.as_ref(), &admin_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.email.as_str(), EMAIL);
        assert_ne!(admin.password.as_phc_string(), PASSWORD);
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_wins_over_mismatch() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let config = config();
        register(&repo, &config).await;

        let err = SignUpUseCase::new(repo.clone(), config.clone())
            .execute(signup_input(EMAIL, PASSWORD, "something-else"))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::EmailTaken));
        assert_eq!(err.to_string(), "Email already taken.");
    }

    #[tokio::test]
    async fn test_signup_password_mismatch() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let err = SignUpUseCase::new(repo, config())
            .execute(signup_input(EMAIL, PASSWORD, "something-else"))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::PasswordConfirmationMismatch));
    }

    #[tokio::test]
    async fn test_signup_field_validation() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let mut input = signup_input(EMAIL, "short", "short");
        input.first_name = "  ".to_string();

        let err = SignUpUseCase::new(repo.clone(), config())
            .execute(input)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "First name is required.");

        let err = SignUpUseCase::new(repo, config())
            .execute(signup_input(EMAIL, "short", "short"))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::Validation(_)));
        assert!(err.to_string().contains("at least 8"));
    }

    #[tokio::test]
    async fn test_signup_lost_race_reports_email_taken() {
        let repo = Arc::new(RacingAdminRepository::default());
        let config = config();
        let use_case = SignUpUseCase::new(repo.clone(), config);

        use_case
            .execute(signup_input(EMAIL, PASSWORD, PASSWORD))
            .await
            .unwrap();
        let err = use_case
            .execute(signup_input(EMAIL, PASSWORD, PASSWORD))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::EmailTaken));
    }

    #[tokio::test]
    async fn test_signup_store_failure_is_internal() {
        let err = SignUpUseCase::new(Arc::new(FailingAdminRepository), config())
            .execute(signup_input(EMAIL, PASSWORD, PASSWORD))
            .await
            .unwrap_err();
        assert!(err.kind().is_server_error());
    }

    #[tokio::test]
    async fn test_login_outcomes() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let config = config();
        register(&repo, &config).await;
        let use_case = SignInUseCase::new(repo.clone(), repo.clone(), config.clone());

        let err = use_case
            .execute(sign_in_input("nobody@example.com", PASSWORD))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::AdminNotFound));

        let err = use_case
            .execute(sign_in_input(EMAIL, "wrong-password"))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::PasswordMismatch));

        // Email comparison is case-sensitive
        let err = use_case
            .execute(sign_in_input("ADA@example.com", PASSWORD))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::AdminNotFound));

        let output = use_case
            .execute(sign_in_input(EMAIL, PASSWORD))
            .await
            .unwrap();
        assert_eq!(output.first_name, "Ada");
        assert!(session_token::verify(&config.session_secret, &output.session_token).is_some());
        assert_eq!(repo.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_check_session_states() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let config = config();
        let admin_id = register(&repo, &config).await;
        let token = SignInUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(sign_in_input(EMAIL, PASSWORD))
            .await
            .unwrap()
            .session_token;
        let check = CheckSessionUseCase::new(repo.clone(), repo.clone(), config.clone());

        assert!(matches!(
            check.execute(None).await.unwrap_err(),
            AdminError::SessionInvalid
        ));
        assert!(matches!(
            check.execute(Some("tampered.token")).await.unwrap_err(),
            AdminError::SessionInvalid
        ));

        let admin = check.execute(Some(&token)).await.unwrap();
        assert_eq!(admin.admin_id, admin_id);

        repo.remove_admin(&admin_id).await;
        assert!(matches!(
            check.execute(Some(&token)).await.unwrap_err(),
            AdminError::SessionAdminMissing
        ));
    }

    #[tokio::test]
    async fn test_expired_session_is_removed() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let config = config();
        let admin_id = register(&repo, &config).await;
        let admin = AdminRepository::find_by_id(repo.as_ref(), &admin_id)
            .await
            .unwrap()
            .unwrap();

        let mut session = AdminSession::open(&admin, Duration::hours(1));
        session.expires_at = Utc::now() - Duration::minutes(1);
        repo.create_session(&session).await.unwrap();
        let token = session_token::sign(&config.session_secret, session.session_id).unwrap();

        let err = CheckSessionUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(Some(&token))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::SessionInvalid));
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_cleanup_expired_sessions() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let config = config();
        let admin_id = register(&repo, &config).await;
        let admin = AdminRepository::find_by_id(repo.as_ref(), &admin_id)
            .await
            .unwrap()
            .unwrap();

        let live = AdminSession::open(&admin, Duration::hours(1));
        let mut stale = AdminSession::open(&admin, Duration::hours(1));
        stale.expires_at = Utc::now() - Duration::seconds(1);
        repo.create_session(&live).await.unwrap();
        repo.create_session(&stale).await.unwrap();

        assert_eq!(repo.cleanup_expired_sessions().await.unwrap(), 1);
        assert!(repo.find_session(live.session_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_sign_out_deletes_session() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let config = config();
        register(&repo, &config).await;
        let token = SignInUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(sign_in_input(EMAIL, PASSWORD))
            .await
            .unwrap()
            .session_token;

        SignOutUseCase::new(repo.clone(), config.clone())
            .execute(&token)
            .await
            .unwrap();
        assert_eq!(repo.session_count().await, 0);

        assert!(matches!(
            SignOutUseCase::new(repo, config)
                .execute("garbage")
                .await
                .unwrap_err(),
            AdminError::SessionInvalid
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::extract::Extension;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use axum::routing::get;
    use kernel::flash::{FLASH_COOKIE_NAME, FlashMessage};
    use kernel::error::conversions::UNREADABLE_FORM_MESSAGE;
    use kernel::outcome::OUTCOME_STATUS_HEADER;
    use tower::ServiceExt;

    use super::support::*;
    use crate::application::config::AdminConfig;
    use crate::infra::memory::InMemoryAdminRepository;
    use crate::presentation::middleware::{AdminGateState, CurrentAdmin, protect};
    use crate::presentation::router::admin_router;

    fn app(repo: &Arc<InMemoryAdminRepository>, config: &Arc<AdminConfig>) -> Router {
        let protected = Router::new().route(
            "/admin/dashboard",
            get(|Extension(admin): Extension<CurrentAdmin>| async move { admin.full_name() }),
        );

        admin_router(repo.clone(), config.clone()).merge(protect(
            protected,
            AdminGateState::new(repo.clone(), config.clone()),
        ))
    }

    fn form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_with_cookie(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn cookie_pair(response: &Response, name: &str) -> Option<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|c| c.starts_with(&format!("{}=", name)))
            .and_then(|c| c.split(';').next())
            .map(str::to_string)
    }

    fn flash(response: &Response) -> FlashMessage {
        let pair = cookie_pair(response, FLASH_COOKIE_NAME).unwrap();
        FlashMessage::decode(pair.split_once('=').unwrap().1).unwrap()
    }

    fn assert_redirect(response: &Response, location: &str, status: &str) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), location);
        assert_eq!(response.headers().get(OUTCOME_STATUS_HEADER).unwrap(), status);
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    const SIGNUP_BODY: &str =
        "firstName=Ada&lastName=Lovelace&email=ada%40example.com&pwd=analytical-engine&pwdConf=analytical-engine";
    const LOGIN_BODY: &str = "email=ada%40example.com&password=analytical-engine";

    #[tokio::test]
    async fn test_login_page_renders() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let response = app(&repo, &config())
            .oneshot(get_with_cookie("/admin/login", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Admin Login"));
    }

    #[tokio::test]
    async fn test_login_page_shows_and_clears_flash() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let cookie = format!(
            "flash={}",
            FlashMessage::failure("Password does not match.").encode()
        );
        let response = app(&repo, &config())
            .oneshot(get_with_cookie("/admin/login", Some(&cookie)))
            .await
            .unwrap();

        assert_eq!(cookie_pair(&response, FLASH_COOKIE_NAME).as_deref(), Some("flash="));
        assert!(body_text(response).await.contains("Password does not match."));
    }

    #[tokio::test]
    async fn test_signup_then_login_then_gate() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let config = config();
        let app = app(&repo, &config);

        let response = app
            .clone()
            .oneshot(form("/admin/signup", SIGNUP_BODY))
            .await
            .unwrap();
        assert_redirect(&response, "/admin/login", "201");
        assert_eq!(flash(&response).message, "Admin registration successful.");

        let response = app
            .clone()
            .oneshot(form("/admin/login", LOGIN_BODY))
            .await
            .unwrap();
        assert_redirect(&response, "/admin/dashboard", "200");
        let session = cookie_pair(&response, "admin_session").unwrap();

        let response = app
            .clone()
            .oneshot(get_with_cookie("/admin/dashboard", Some(&session)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_login_failures_redirect_to_login() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let config = config();
        register(&repo, &config).await;
        let app = app(&repo, &config);

        let response = app
            .clone()
            .oneshot(form(
                "/admin/login",
                "email=ada%40example.com&password=wrong-password",
            ))
            .await
            .unwrap();
        assert_redirect(&response, "/admin/login", "401");
        assert_eq!(flash(&response).message, "Password does not match.");
        assert!(cookie_pair(&response, "admin_session").is_none());

        let response = app
            .oneshot(form("/admin/login", "email=bob%40example.com&password=x"))
            .await
            .unwrap();
        assert_redirect(&response, "/admin/login", "404");
        assert_eq!(flash(&response).message, "Admin not found. Please try again.");
    }

    #[tokio::test]
    async fn test_signup_missing_fields_is_bad_request() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let response = app(&repo, &config())
            .oneshot(form("/admin/signup", "email=ada%40example.com"))
            .await
            .unwrap();
        assert_redirect(&response, "/admin/signup", "400");
    }

    #[tokio::test]
    async fn test_gate_without_session() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let response = app(&repo, &config())
            .oneshot(get_with_cookie("/admin/dashboard", None))
            .await
            .unwrap();

        assert_redirect(&response, "/admin/login", "401");
        assert_eq!(
            flash(&response).message,
            "You must be logged in to access the page."
        );
    }

    #[tokio::test]
    async fn test_gate_with_missing_admin() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let config = config();
        let admin_id = register(&repo, &config).await;
        let app = app(&repo, &config);

        let response = app
            .clone()
            .oneshot(form("/admin/login", LOGIN_BODY))
            .await
            .unwrap();
        let session = cookie_pair(&response, "admin_session").unwrap();

        repo.remove_admin(&admin_id).await;

        let response = app
            .oneshot(get_with_cookie("/admin/dashboard", Some(&session)))
            .await
            .unwrap();
        assert_redirect(&response, "/admin/login", "404");
        assert_eq!(flash(&response).message, "Admin not found.");
    }

    #[tokio::test]
    async fn test_logout_destroys_session() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let config = config();
        register(&repo, &config).await;
        let app = app(&repo, &config);

        let response = app
            .clone()
            .oneshot(form("/admin/login", LOGIN_BODY))
            .await
            .unwrap();
        let session = cookie_pair(&response, "admin_session").unwrap();
        assert_eq!(repo.session_count().await, 1);

        let response = app
            .clone()
            .oneshot(get_with_cookie("/admin/logout", Some(&session)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/admin/login"
        );
        assert_eq!(
            cookie_pair(&response, "admin_session").as_deref(),
            Some("admin_session=")
        );
        assert_eq!(repo.session_count().await, 0);

        let response = app
            .oneshot(get_with_cookie("/admin/dashboard", Some(&session)))
            .await
            .unwrap();
        assert_redirect(&response, "/admin/login", "401");
    }

    #[tokio::test]
    async fn test_login_without_form_body_redirects_with_flash() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let request = Request::builder()
            .method("POST")
            .uri("/admin/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"email":"ada@example.com"}"#))
            .unwrap();

        let response = app(&repo, &config()).oneshot(request).await.unwrap();

        assert_redirect(&response, "/admin/login", "400");
        assert_eq!(flash(&response).message, UNREADABLE_FORM_MESSAGE);
        assert!(cookie_pair(&response, "admin_session").is_none());
    }

    #[tokio::test]
    async fn test_signup_with_repeated_field_redirects_with_flash() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let body = format!("{}&email=grace%40example.com", SIGNUP_BODY);

        let response = app(&repo, &config())
            .oneshot(form("/admin/signup", &body))
            .await
            .unwrap();

        assert_redirect(&response, "/admin/signup", "400");
        assert_eq!(flash(&response).message, UNREADABLE_FORM_MESSAGE);
    }
}
