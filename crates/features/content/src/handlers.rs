use crate::Content;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use folio_auth::AdminSession;
use folio_kernel::domain::constants::MSG_INVALID_PAYLOAD;
use folio_kernel::server::body::json_or_empty;
use folio_kernel::server::{ApiError, ApiJson, ApiState};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Serialize)]
struct ContentResponse {
    content: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct UpdateResponse {
    ok: bool,
    content: BTreeMap<String, String>,
}

/// `GET /api/content`, public.
pub(crate) async fn get_content(
    State(state): State<ApiState>,
) -> Result<impl IntoResponse, ApiError> {
    let slice = state.try_get_slice::<Content>()?;
    let content = slice.store.fetch_all().await?;
    Ok(ApiJson(ContentResponse { content }))
}

/// `POST /api/content/update` with `{"content": {..}}`.
///
/// The session is checked before the body is looked at.
pub(crate) async fn update_content(
    session: AdminSession,
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let slice = state.try_get_slice::<Content>()?;
    let values = update_payload(&body).ok_or_else(|| ApiError::validation(MSG_INVALID_PAYLOAD))?;

    slice.store.update(&values).await?;
    info!(keys = values.len(), by = %session.identity, "Content updated");

    let content = slice.store.fetch_all().await?;
    Ok(ApiJson(UpdateResponse { ok: true, content }))
}

/// The `content` object of an update body, if the body has one.
fn update_payload(body: &[u8]) -> Option<Map<String, Value>> {
    match json_or_empty(body)? {
        Value::Object(mut payload) => match payload.remove("content")? {
            Value::Object(values) => Some(values),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_the_content_object() {
        let values = update_payload(br#"{"content":{"hero_name":"Budi","count":3}}"#)
            .expect("valid payload");
        assert_eq!(Value::Object(values), json!({ "hero_name": "Budi", "count": 3 }));
    }

    #[test]
    fn empty_content_object_is_valid() {
        assert_eq!(update_payload(br#"{"content":{}}"#).map(|v| v.len()), Some(0));
    }

    #[test]
    fn rejects_everything_else() {
        for body in [
            &b""[..],
            b"{}",
            b"{broken",
            br#"{"content":"hero_name"}"#,
            br#"{"content":["hero_name"]}"#,
            br#"{"content":null}"#,
            br#"[{"content":{}}]"#,
        ] {
            assert!(update_payload(body).is_none(), "{}", String::from_utf8_lossy(body));
        }
    }
}
