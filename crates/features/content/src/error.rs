use folio_kernel::domain::constants::MSG_INVALID_PAYLOAD;
use folio_kernel::server::ApiError;
use std::borrow::Cow;

/// A specialized [`ContentError`] enum of this crate.
#[folio_derive::folio_error]
pub enum ContentError {
    /// The content table could not be read or written.
    #[error("Content storage error{}: {source}", format_context(.context))]
    Storage {
        #[source]
        source: surrealdb::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Rejected update payload.
    #[error("Invalid content{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal content error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::Validation { .. } => Self::validation(MSG_INVALID_PAYLOAD),
            ContentError::Storage { .. } => {
                Self::Storage { message: err.to_string().into(), context: None }
            },
            ContentError::Internal { .. } => {
                Self::Internal { message: err.to_string().into(), context: None }
            },
        }
    }
}
