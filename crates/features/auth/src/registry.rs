use crate::error::{AuthError, AuthErrorExt};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// 192 bits, encoded as 32 URL-safe characters.
const TOKEN_BYTES: usize = 24;

/// In-memory map of live session tokens to the identity that opened them.
///
/// Tokens live until logout or process exit; there is no expiry sweep.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<FxHashMap<String, String>>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session for `identity` and returns its token.
    ///
    /// # Errors
    /// Returns [`AuthError::Entropy`] if the OS random source is unavailable.
    pub fn create(&self, identity: impl Into<String>) -> Result<String, AuthError> {
        let token = generate_token()?;
        self.sessions.write().insert(token.clone(), identity.into());
        Ok(token)
    }

    #[must_use]
    pub fn validate(&self, token: &str) -> bool {
        self.sessions.read().contains_key(token)
    }

    /// Identity bound to `token`, if the session is live.
    #[must_use]
    pub fn identity(&self, token: &str) -> Option<String> {
        self.sessions.read().get(token).cloned()
    }

    /// Removes the session. Returns whether it existed.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.write().remove(token).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }
}

// Tokens are bearer credentials; only the count is printed.
impl fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRegistry").field("active", &self.len()).finish()
    }
}

fn generate_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    getrandom::fill(&mut bytes).context("Generating session token")?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    #[test]
    fn created_tokens_validate_until_revoked() {
        let registry = SessionRegistry::new();
        let token = registry.create("admin@example.com").expect("token");

        assert!(registry.validate(&token));
        assert_eq!(registry.identity(&token).as_deref(), Some("admin@example.com"));

        assert!(registry.revoke(&token));
        assert!(!registry.validate(&token));
        assert!(!registry.revoke(&token), "second revoke is a no-op");
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let registry = SessionRegistry::new();
        assert!(!registry.validate(""));
        assert!(!registry.validate("not-a-session"));
    }

    #[test]
    fn tokens_are_url_safe_and_distinct() {
        let registry = SessionRegistry::new();
        let tokens: FxHashSet<String> =
            (0..64).map(|_| registry.create("admin").expect("token")).collect();

        assert_eq!(tokens.len(), 64);
        assert_eq!(registry.len(), 64);
        for token in &tokens {
            assert_eq!(token.len(), 32);
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
    }

    #[test]
    fn clones_share_sessions() {
        let registry = SessionRegistry::new();
        let other = registry.clone();
        let token = registry.create("admin").expect("token");

        assert!(other.validate(&token));
        other.revoke(&token);
        assert!(!registry.validate(&token));
    }

    #[test]
    fn debug_output_hides_tokens() {
        let registry = SessionRegistry::new();
        let token = registry.create("admin").expect("token");
        let printed = format!("{registry:?}");

        assert!(!printed.contains(&token));
        assert!(printed.contains("active: 1"));
    }
}
