use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::get_service;
use folio::kernel::server::ApiState;
use folio::kernel::server::error::not_found;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// API routes, the admin console, and the static site as the fallback.
///
/// Anything nothing answers for, including a known path with the wrong method, gets the
/// JSON 404.
#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let storage = &state.config.storage;
    let admin_page = get_service(ServeFile::new(storage.admin_page_path()));
    let static_site = ServeDir::new(&storage.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    folio::server::router::api_router()
        .route("/admin", admin_page.clone())
        .route("/admin.html", admin_page)
        .fallback_service(static_site)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
