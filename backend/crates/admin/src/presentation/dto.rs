//! Form DTOs (Data Transfer Objects)
//!
//! Bodies are `application/x-www-form-urlencoded`. Missing fields default to
//! empty strings so that validation, not extraction, reports them.

use serde::Deserialize;

use crate::application::{SignInInput, SignUpInput};

// ============================================================================
// Sign Up
// ============================================================================

/// Signup form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub pwd: String,
    #[serde(rename = "pwdConf")]
    pub pwd_conf: String,
}

impl From<SignupForm> for SignUpInput {
    fn from(form: SignupForm) -> Self {
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            password: form.pwd,
            password_confirmation: form.pwd_conf,
        }
    }
}

// ============================================================================
// Log In
// ============================================================================

/// Login form
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl From<LoginForm> for SignInInput {
    fn from(form: LoginForm) -> Self {
        Self {
            email: form.email,
            password: form.password,
        }
    }
}
