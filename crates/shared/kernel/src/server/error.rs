use super::response::ApiJson;
use super::state::ApiStateError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_domain::constants::{MSG_BAD_CREDENTIALS, MSG_INTERNAL, MSG_NOT_FOUND, MSG_UNAUTHORIZED};
use serde_json::json;
use std::borrow::Cow;
use tracing::error;

/// Every failure an API handler can answer with.
///
/// Storage and internal failures are logged with their detail and reach the client only as a
/// generic 500; the process and the session registry are unaffected.
#[folio_derive::folio_error]
pub enum ApiError {
    /// 400 with the message as the body's `error`.
    #[error("Bad request{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// 401 for a missing or unknown session.
    #[error("Unauthorized{}", format_context(.context))]
    Unauthorized { context: Option<Cow<'static, str>> },

    /// 401 for a failed login. Never says which field was wrong.
    #[error("Credential mismatch{}", format_context(.context))]
    Credentials { context: Option<Cow<'static, str>> },

    #[error("Not found{}", format_context(.context))]
    NotFound { context: Option<Cow<'static, str>> },

    #[error("Storage failure{}: {message}", format_context(.context))]
    Storage { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation { message: message.into(), context: None }
    }

    #[must_use]
    pub const fn unauthorized() -> Self {
        Self::Unauthorized { context: None }
    }

    #[must_use]
    pub const fn credentials() -> Self {
        Self::Credentials { context: None }
    }

    #[must_use]
    pub const fn not_found() -> Self {
        Self::NotFound { context: None }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } | Self::Credentials { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation { message, .. } => json!({ "error": message }),
            Self::Unauthorized { .. } => json!({ "error": MSG_UNAUTHORIZED }),
            Self::Credentials { .. } => json!({ "ok": false, "error": MSG_BAD_CREDENTIALS }),
            Self::NotFound { .. } => json!({ "error": MSG_NOT_FOUND }),
            Self::Storage { .. } | Self::Internal { .. } => {
                error!(error = %self, "Request failed");
                json!({ "error": MSG_INTERNAL })
            },
        };

        (status, ApiJson(body)).into_response()
    }
}

impl From<ApiStateError> for ApiError {
    fn from(err: ApiStateError) -> Self {
        Self::Internal { message: err.to_string().into(), context: Some("Resolving state".into()) }
    }
}

/// Fallback handler for unmatched paths and methods.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
