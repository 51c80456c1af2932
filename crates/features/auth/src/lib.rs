//! Operator authentication feature slice.
//!
//! A single operator logs in with the configured identity and receives an opaque session
//! cookie. Handlers in other slices demand a live session through the [`AdminSession`]
//! extractor.

mod error;
mod extract;
pub mod gate;
mod handlers;
pub mod identity;
pub mod registry;
mod router;

pub use crate::error::{AuthError, AuthErrorExt};
pub use crate::extract::AdminSession;
pub use crate::router::router;

use crate::gate::AuthGate;
use crate::identity::AdminIdentity;
use crate::registry::SessionRegistry;
use folio_kernel::domain::config::ApiConfig;
use folio_kernel::domain::registry::InitializedSlice;
use tracing::{info, warn};

/// Auth feature state
#[folio_derive::folio_slice]
pub struct Auth {
    pub sessions: SessionRegistry,
    pub gate: AuthGate,
    pub admin: AdminIdentity,
}

/// Builds the auth slice with an empty session registry.
///
/// # Errors
/// Returns [`AuthError::Config`] when the configured operator identity is blank.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, AuthError> {
    let admin_config = &config.security.admin;
    let admin = AdminIdentity::from_config(admin_config).context("security.admin")?;

    if admin_config.uses_dev_password() {
        warn!(
            email = %admin.email(),
            "Admin password is the development default; set FOLIO__SECURITY__ADMIN__PASSWORD"
        );
    }

    let sessions = SessionRegistry::new();
    let slice = Auth::new(AuthInner { gate: AuthGate::new(sessions.clone()), sessions, admin });

    info!("Auth slice initialized");
    Ok(slice.into())
}
