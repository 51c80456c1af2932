use crate::Auth;
use crate::error::AuthError;
use crate::gate::session_token;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::IntoResponse;
use folio_kernel::domain::constants::{MSG_INVALID_JSON, MSG_LOGIN_OK, SESSION_COOKIE};
use folio_kernel::server::body::json_or_empty;
use folio_kernel::server::{ApiError, ApiJson, ApiState};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

const LOGOUT_COOKIE: &str = "session=; Path=/; Max-Age=0; SameSite=Lax";

#[derive(Debug, Serialize)]
struct LoginResponse {
    ok: bool,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct LogoutResponse {
    ok: bool,
}

#[derive(Debug, Serialize)]
struct SessionResponse {
    authenticated: bool,
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Internal { message: err.to_string().into(), context: None }
    }
}

fn login_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; Path=/; SameSite=Lax")
}

/// `POST /api/login` with `{"email": .., "password": ..}`.
///
/// Anything that is not an object with both string fields matching the operator identity is
/// a credential mismatch.
pub(crate) async fn login(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let auth = state.try_get_slice::<Auth>()?;
    let payload = json_or_empty(&body).ok_or_else(|| ApiError::validation(MSG_INVALID_JSON))?;

    let email = payload.get("email").and_then(Value::as_str);
    let password = payload.get("password").and_then(Value::as_str);
    let accepted = matches!((email, password), (Some(e), Some(p)) if auth.admin.matches(e, p));
    if !accepted {
        warn!("Login rejected");
        return Err(ApiError::credentials());
    }

    let token = auth.sessions.create(auth.admin.email())?;
    info!(email = %auth.admin.email(), "Operator logged in");

    Ok((
        [(header::SET_COOKIE, login_cookie(&token))],
        ApiJson(LoginResponse { ok: true, message: MSG_LOGIN_OK }),
    ))
}

/// `POST /api/logout`. Always succeeds and always clears the cookie.
pub(crate) async fn logout(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let auth = state.try_get_slice::<Auth>()?;

    if let Some(token) = session_token(&headers)
        && auth.sessions.revoke(&token)
    {
        info!("Operator logged out");
    }

    Ok(([(header::SET_COOKIE, LOGOUT_COOKIE)], ApiJson(LogoutResponse { ok: true })))
}

/// `GET /api/session`.
pub(crate) async fn session(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let auth = state.try_get_slice::<Auth>()?;
    Ok(ApiJson(SessionResponse { authenticated: auth.gate.is_authorized(&headers) }))
}
