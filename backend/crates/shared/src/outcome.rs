//! Outcome Signal
//!
//! すべてのワークフローが境界層（フラッシュメッセージ + リダイレクト）へ結果を伝える唯一の手段。
//! 成功・失敗の別、HTTP 相当のステータス、利用者向けメッセージ、リダイレクト先を保持します。

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{app_error::AppError, kind::ErrorKind};
use crate::flash::FlashMessage;

/// 想定外エラー時に利用者へ見せる汎用メッセージ
///
/// 内部の診断情報は決して含めない。
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again later.";

/// 論理ステータスを載せるレスポンスヘッダ名
pub const OUTCOME_STATUS_HEADER: &str = "x-outcome-status";

/// 結果の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Success,
    Failure,
}

/// Outcome Signal
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
/// use kernel::outcome::{Outcome, OutcomeKind};
///
/// let ok = Outcome::created("Widget added successfully.", "/admin/dashboard");
/// assert_eq!(ok.kind(), OutcomeKind::Success);
/// assert_eq!(ok.status(), 201);
///
/// let ng = Outcome::failure(ErrorKind::Unauthorized, "Password does not match.", "/admin/login");
/// assert_eq!(ng.error_kind(), Some(ErrorKind::Unauthorized));
/// assert_eq!(ng.status(), 401);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    status: u16,
    error: Option<ErrorKind>,
    message: Cow<'static, str>,
    redirect_to: Cow<'static, str>,
}

impl Outcome {
    /// 成功（任意のステータス）
    pub fn success(
        status: u16,
        message: impl Into<Cow<'static, str>>,
        redirect_to: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            status,
            error: None,
            message: message.into(),
            redirect_to: redirect_to.into(),
        }
    }

    /// 200 OK の成功
    pub fn ok(
        message: impl Into<Cow<'static, str>>,
        redirect_to: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::success(200, message, redirect_to)
    }

    /// 201 Created の成功
    pub fn created(
        message: impl Into<Cow<'static, str>>,
        redirect_to: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::success(201, message, redirect_to)
    }

    /// 失敗
    pub fn failure(
        kind: ErrorKind,
        message: impl Into<Cow<'static, str>>,
        redirect_to: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            status: kind.status_code(),
            error: Some(kind),
            message: message.into(),
            redirect_to: redirect_to.into(),
        }
    }

    /// 想定外エラー（汎用メッセージ）
    pub fn internal(redirect_to: impl Into<Cow<'static, str>>) -> Self {
        Self::failure(
            ErrorKind::InternalServerError,
            GENERIC_FAILURE_MESSAGE,
            redirect_to,
        )
    }

    /// `AppError` から失敗を作る
    ///
    /// サーバーエラーはメッセージを汎用文言に差し替える。
    pub fn from_app_error(err: &AppError, redirect_to: impl Into<Cow<'static, str>>) -> Self {
        if err.is_server_error() {
            return Self::internal(redirect_to);
        }
        Self::failure(err.kind(), err.message().to_string(), redirect_to)
    }

    pub fn kind(&self) -> OutcomeKind {
        match self.error {
            Some(_) => OutcomeKind::Failure,
            None => OutcomeKind::Success,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// 失敗時のエラー種別
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn redirect_to(&self) -> &str {
        &self.redirect_to
    }

    /// 次の画面で表示するフラッシュメッセージ
    pub fn flash(&self) -> FlashMessage {
        FlashMessage::new(self.kind(), self.message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_outcomes() {
        let outcome = Outcome::ok("Product updated successfully.", "/admin/dashboard");
        assert!(outcome.is_success());
        assert_eq!(outcome.status(), 200);
        assert_eq!(outcome.redirect_to(), "/admin/dashboard");
        assert!(outcome.error_kind().is_none());
    }

    #[test]
    fn test_failure_outcome_carries_kind() {
        let outcome = Outcome::failure(ErrorKind::NotFound, "Admin not found.", "/admin/login");
        assert_eq!(outcome.kind(), OutcomeKind::Failure);
        assert_eq!(outcome.status(), 404);
        assert_eq!(outcome.message(), "Admin not found.");
    }

    #[test]
    fn test_internal_hides_details() {
        let err = AppError::internal("connection reset by peer");
        let outcome = Outcome::from_app_error(&err, "/admin/dashboard");
        assert_eq!(outcome.status(), 500);
        assert_eq!(outcome.message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_validation_message_is_kept() {
        let err = AppError::invalid_field("price", "Price cannot be negative.");
        let outcome = Outcome::from_app_error(&err, "/admin/addProduct");
        assert_eq!(outcome.error_kind(), Some(ErrorKind::BadRequest));
        assert_eq!(outcome.message(), "Price cannot be negative.");
    }

    #[test]
    fn test_flash_mirrors_outcome() {
        let outcome = Outcome::failure(ErrorKind::BadRequest, "Email already taken.", "/admin/signup");
        let flash = outcome.flash();
        assert_eq!(flash.kind, OutcomeKind::Failure);
        assert_eq!(flash.message, "Email already taken.");
    }
}
