//! Flash cookie plumbing.
//!
//! A flash message is carried in a short-lived, URL-encoded `flash` cookie
//! set on a redirect response. The page render that reads it also expires
//! the cookie, so exactly one read consumes the message.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use folio_core::flash::FlashMessage;

const COOKIE_NAME: &str = "flash";

/// Upper bound on how long an unread flash survives, in seconds.
const MAX_AGE_SECS: u32 = 60;

/// Build a 303 redirect carrying a flash cookie.
pub fn redirect_with_flash(location: &str, flash: &FlashMessage) -> Response {
    let cookie = format!(
        "{COOKIE_NAME}={}; Max-Age={MAX_AGE_SECS}; Path=/; HttpOnly; SameSite=Lax",
        flash.encode()
    );
    let mut response = Redirect::to(location).into_response();
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response.headers_mut().append(SET_COOKIE, value);
    }
    response
}

/// Read a pending flash from the request's `Cookie` header.
pub fn read_flash(headers: &HeaderMap) -> Option<FlashMessage> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == COOKIE_NAME {
            FlashMessage::decode(value)
        } else {
            None
        }
    })
}

/// Attach a removal cookie to a response, consuming the pending flash.
pub fn clear_flash(response: &mut Response) {
    response.headers_mut().append(
        SET_COOKIE,
        HeaderValue::from_static("flash=; Max-Age=0; Path=/"),
    );
}
