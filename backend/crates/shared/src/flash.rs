//! Flash Message
//!
//! リダイレクト先の画面で一度だけ表示するメッセージ。
//! JSON を base64url でエンコードして短命の Cookie に載せます。

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

use crate::outcome::OutcomeKind;

/// フラッシュメッセージの Cookie 名
pub const FLASH_COOKIE_NAME: &str = "flash";

/// フラッシュ Cookie の寿命（秒）
const FLASH_MAX_AGE_SECS: u32 = 60;

/// フラッシュメッセージ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub kind: OutcomeKind,
    pub message: String,
}

impl FlashMessage {
    pub fn new(kind: OutcomeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Success, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Failure, message)
    }

    /// テンプレートでの表示切り替え用
    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }

    /// Cookie 値へエンコード
    pub fn encode(&self) -> String {
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Cookie 値からデコード（壊れた値は無視する）
    pub fn decode(raw: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(raw.trim()).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Set-Cookie ヘッダ値
    pub fn set_cookie(&self) -> String {
        format!(
            "{}={}; HttpOnly; Path=/; Max-Age={}; SameSite=Lax",
            FLASH_COOKIE_NAME,
            self.encode(),
            FLASH_MAX_AGE_SECS
        )
    }

    /// 表示済みのフラッシュを消す Set-Cookie ヘッダ値
    pub fn clear_cookie() -> String {
        format!("{}=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax", FLASH_COOKIE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_cookie_safe() {
        let flash = FlashMessage::failure("Passwords do not match; try \"again\".");
        let encoded = flash.encode();
        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert_eq!(FlashMessage::decode(&encoded), Some(flash));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(FlashMessage::decode("%%%").is_none());
        assert!(FlashMessage::decode("bm90IGpzb24").is_none());
    }

    #[test]
    fn test_set_cookie_shape() {
        let cookie = FlashMessage::success("Admin registration successful.").set_cookie();
        assert!(cookie.starts_with("flash="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=60"));
        assert!(FlashMessage::clear_cookie().contains("Max-Age=0"));
    }
}
