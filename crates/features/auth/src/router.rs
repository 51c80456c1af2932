use crate::handlers;
use axum::Router;
use axum::routing::{get, post};
use folio_kernel::server::ApiState;

/// Login, logout and session-check endpoints.
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/session", get(handlers::session))
}
