//! Site content feature slice.
//!
//! The public site reads its copy from `GET /api/content`; the operator edits it through
//! `POST /api/content/update`. The copy lives in the `content` table and is seeded from
//! [`DEFAULT_CONTENT`] on startup.

mod defaults;
mod error;
mod handlers;
mod router;
pub mod store;

pub use crate::defaults::DEFAULT_CONTENT;
pub use crate::error::{ContentError, ContentErrorExt};
pub use crate::router::router;

use crate::store::ContentStore;
use folio_database::Database;
use folio_kernel::domain::registry::InitializedSlice;
use tracing::info;

/// Content feature state
#[folio_derive::folio_slice]
pub struct Content {
    pub store: ContentStore,
}

/// Opens the content table, seeds missing defaults and builds the slice.
///
/// # Errors
/// Returns [`ContentError::Storage`] if the table cannot be declared or seeded.
pub async fn init(database: &Database) -> Result<InitializedSlice, ContentError> {
    let store = ContentStore::open(database.clone()).await.context("Opening content store")?;
    store.seed(DEFAULT_CONTENT).await?;

    info!(defaults = DEFAULT_CONTENT.len(), "Content slice initialized");
    Ok(Content::new(ContentInner { store }).into())
}
