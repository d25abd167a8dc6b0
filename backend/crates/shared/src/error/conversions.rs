//! Error conversions - HTTP boundary conversions
//!
//! [`Outcome`] を axum のレスポンス（303 リダイレクト + フラッシュ Cookie）に変換し、
//! フォーム抽出の失敗を [`AppError`] に変換します。

#[cfg(feature = "axum")]
use crate::error::app_error::AppError;
#[cfg(feature = "axum")]
use crate::outcome::{OUTCOME_STATUS_HEADER, Outcome};

/// フォームを読み取れなかったときの利用者向けメッセージ
pub const UNREADABLE_FORM_MESSAGE: &str = "The form could not be read. Please try again.";

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Outcome をリダイレクトに変換
///
/// * 本体は `303 See Other` で `redirect_to` へ遷移させる
/// * メッセージはフラッシュ Cookie として次の画面に渡す
/// * 論理ステータスは `x-outcome-status` ヘッダに載せる
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for Outcome {
    fn into_response(self) -> axum::response::Response {
        use axum::http::{HeaderName, HeaderValue, header};
        use axum::response::Redirect;

        let mut response = Redirect::to(self.redirect_to()).into_response();
        let headers = response.headers_mut();

        if let Ok(cookie) = HeaderValue::from_str(&self.flash().set_cookie()) {
            headers.append(header::SET_COOKIE, cookie);
        }
        headers.insert(
            HeaderName::from_static(OUTCOME_STATUS_HEADER),
            HeaderValue::from(self.status()),
        );

        response
    }
}

/// フォーム抽出の失敗（Content-Type 不一致、重複フィールドなど）
///
/// 400 として扱い、各ワークフローのリダイレクト + フラッシュに乗せる。
#[cfg(feature = "axum")]
impl From<axum::extract::rejection::FormRejection> for AppError {
    fn from(rejection: axum::extract::rejection::FormRejection) -> Self {
        AppError::bad_request(UNREADABLE_FORM_MESSAGE).with_source(rejection)
    }
}
