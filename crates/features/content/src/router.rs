use crate::handlers;
use axum::Router;
use axum::routing::{get, post};
use folio_kernel::server::ApiState;

/// Public read and authenticated write of the site copy.
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/api/content", get(handlers::get_content))
        .route("/api/content/update", post(handlers::update_content))
}
