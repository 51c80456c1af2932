use crate::Auth;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_kernel::server::{ApiError, ApiState};

/// Proof that the request carries a live operator session.
///
/// Rejects with `401 {"error":"Unauthorized"}` before the handler body is read, so
/// unauthenticated writes never reach payload validation.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub identity: String,
}

impl FromRequestParts<ApiState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ApiState,
    ) -> Result<Self, Self::Rejection> {
        let auth = state.try_get_slice::<Auth>()?;
        let identity = auth.gate.identity(&parts.headers).ok_or_else(ApiError::unauthorized)?;
        Ok(Self { identity })
    }
}
