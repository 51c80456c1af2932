//! Facade crate for the Folio features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! Call [`init`] once at startup, register the returned slices in the
//! [`kernel::server::ApiState`], and mount [`server::router::api_router`].

use folio_database::Database;
use folio_domain::config::ApiConfig;
use folio_domain::registry::InitializedSlice;
use std::borrow::Cow;

pub use folio_domain as domain;
pub use folio_kernel as kernel;

pub mod server {
    pub mod router {
        use axum::Router;
        use folio_kernel::server::ApiState;
        pub use folio_kernel::server::router::system_router;

        /// Every feature endpoint plus the system routes, ready for `with_state`.
        pub fn api_router() -> Router<ApiState> {
            Router::new()
                .merge(system_router())
                .merge(crate::features::auth::router())
                .merge(crate::features::content::router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use folio_auth as auth;
    pub use folio_content as content;

    /// Slices compiled into this build.
    pub const ENABLED: &[&str] = &["auth", "content"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[folio_derive::folio_error]
pub enum InitError {
    #[error("Auth slice failed{}: {source}", format_context(.context))]
    Auth {
        #[source]
        source: folio_auth::AuthError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Content slice failed{}: {source}", format_context(.context))]
    Content {
        #[source]
        source: folio_content::ContentError,
        context: Option<Cow<'static, str>>,
    },
}

/// Initializes every feature slice.
///
/// # Errors
/// Returns the first slice failure, e.g. a blank admin identity or an unusable content table.
pub async fn init(
    config: &ApiConfig,
    database: &Database,
) -> Result<Vec<InitializedSlice>, InitError> {
    let mut slices = Vec::new();

    // Auth first: content routes depend on its session gate.
    slices.push(features::auth::init(config)?);
    slices.push(features::content::init(database).await?);

    Ok(slices)
}
