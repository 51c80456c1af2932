use crate::registry::SessionRegistry;
use axum::http::HeaderMap;
use axum_extra::extract::CookieJar;
use folio_kernel::domain::constants::SESSION_COOKIE;

/// Decides whether a request carries a live session cookie.
#[derive(Debug, Clone)]
pub struct AuthGate {
    sessions: SessionRegistry,
}

impl AuthGate {
    #[must_use]
    pub const fn new(sessions: SessionRegistry) -> Self {
        Self { sessions }
    }

    /// True iff the `session` cookie names a live session.
    #[must_use]
    pub fn is_authorized(&self, headers: &HeaderMap) -> bool {
        session_token(headers).is_some_and(|token| self.sessions.validate(&token))
    }

    /// Identity behind the request's session, if it is live.
    #[must_use]
    pub fn identity(&self, headers: &HeaderMap) -> Option<String> {
        session_token(headers).and_then(|token| self.sessions.identity(&token))
    }
}

/// Extracts the `session` cookie from every `Cookie` header of the request.
///
/// Surrounding double quotes are stripped; an empty value counts as absent.
#[must_use]
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value_trimmed().to_owned())
        .filter(|token| !token.is_empty())
}
