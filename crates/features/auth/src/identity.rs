use crate::error::AuthError;
use folio_kernel::domain::config::AdminConfig;
use std::fmt;

/// The single operator allowed to edit content.
#[derive(Clone)]
pub struct AdminIdentity {
    email: String,
    password: String,
}

impl AdminIdentity {
    /// # Errors
    /// Returns [`AuthError::Config`] for a blank email or password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, AuthError> {
        let (email, password) = (email.into(), password.into());
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::Config {
                message: "Admin email and password must not be empty".into(),
                context: None,
            });
        }
        Ok(Self { email, password })
    }

    /// # Errors
    /// See [`AdminIdentity::new`].
    pub fn from_config(config: &AdminConfig) -> Result<Self, AuthError> {
        Self::new(config.email.clone(), config.password.clone())
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Both fields are compared before answering so the result does not reveal which one
    /// was wrong.
    #[must_use]
    pub fn matches(&self, email: &str, password: &str) -> bool {
        let email_ok = self.email == email;
        let password_ok = self.password == password;
        email_ok & password_ok
    }
}

impl fmt::Debug for AdminIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminIdentity")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
