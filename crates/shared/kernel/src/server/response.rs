use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

/// Media type stamped on every API body, including errors and the JSON 404.
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// JSON responder that always declares the UTF-8 charset.
///
/// `axum::Json` answers with a bare `application/json`; the public site and the admin console
/// both read the charset from the header, so API handlers use this wrapper instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => {
                ([(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))], body).into_response()
            },
            Err(err) => {
                error!(error = %err, "Failed to serialize response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
                    r#"{"error":"Internal server error"}"#,
                )
                    .into_response()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::json;

    #[tokio::test]
    async fn sets_charset_and_serializes_body() {
        let response = ApiJson(json!({ "ok": true })).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_UTF8);

        let body = response.into_body().collect().await.expect("body").to_bytes();
        assert_eq!(&body[..], br#"{"ok":true}"#);
    }
}
