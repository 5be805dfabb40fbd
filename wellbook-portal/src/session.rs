//! Session cookie plumbing

use tower_cookies::{Cookie, Cookies};

use wellbook_core::SessionToken;

pub const SESSION_COOKIE: &str = "wellbook_session";

/// Session token carried by the request, if any
pub fn token_from_cookies(cookies: &Cookies) -> Option<SessionToken> {
    cookies
        .get(SESSION_COOKIE)
        .map(|c| SessionToken(c.value().to_string()))
}

/// Helper to set the session cookie
pub fn set_session_cookie(cookies: &Cookies, token: &SessionToken) {
    let cookie = Cookie::build((SESSION_COOKIE, token.0.clone()))
        .path("/")
        .http_only(true)
        .build();
    cookies.add(cookie);
}

/// Helper to clear the session cookie
pub fn clear_session_cookie(cookies: &Cookies) {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .max_age(tower_cookies::cookie::time::Duration::ZERO)
        .build();
    cookies.add(cookie);
}
