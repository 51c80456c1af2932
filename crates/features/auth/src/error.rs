use std::borrow::Cow;

/// A specialized [`AuthError`] enum of this crate.
#[folio_derive::folio_error]
pub enum AuthError {
    /// The operating system refused to hand out random bytes for a token.
    #[error("Entropy source failed{}: {source}", format_context(.context))]
    Entropy {
        #[source]
        source: getrandom::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Unusable operator identity in the configuration.
    #[error("Auth config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal auth error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
