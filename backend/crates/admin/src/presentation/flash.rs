//! Flash message plumbing for rendered pages
//!
//! GET pages read the pending flash message and clear its cookie in the same
//! response, so each message is shown exactly once.

use axum::http::{HeaderMap, header};
use axum::response::{AppendHeaders, IntoResponse, Response};
use kernel::flash::{FLASH_COOKIE_NAME, FlashMessage};

/// Read the pending flash message, if any
pub fn take_flash(headers: &HeaderMap) -> Option<FlashMessage> {
    platform::cookie::extract_cookie(headers, FLASH_COOKIE_NAME)
        .and_then(|raw| FlashMessage::decode(&raw))
}

/// Render a page, clearing the flash cookie when one was shown
pub fn render_page(flash_shown: bool, page: impl IntoResponse) -> Response {
    if flash_shown {
        (
            AppendHeaders([(header::SET_COOKIE, FlashMessage::clear_cookie())]),
            page,
        )
            .into_response()
    } else {
        page.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_take_flash() {
        let flash = FlashMessage::success("Admin registration successful.");
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("other=1; flash={}", flash.encode())).unwrap(),
        );
        assert_eq!(take_flash(&headers), Some(flash));
    }

    #[test]
    fn test_render_page_clears_cookie() {
        let response = render_page(true, "page");
        let cookie = response.headers().get(header::SET_COOKIE).unwrap();
        assert!(cookie.to_str().unwrap().contains("Max-Age=0"));

        let response = render_page(false, "page");
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
