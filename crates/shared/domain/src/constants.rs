//! Wire-level names and the messages returned to clients.
//!
//! The admin console and the public site match on these strings, so they are part of the API.

/// Cookie carrying the admin session token.
pub const SESSION_COOKIE: &str = "session";

pub const MSG_LOGIN_OK: &str = "Login berhasil";
pub const MSG_INVALID_JSON: &str = "JSON tidak valid";
pub const MSG_BAD_CREDENTIALS: &str = "Email/password salah";
pub const MSG_INVALID_PAYLOAD: &str = "Payload tidak valid";
pub const MSG_UNAUTHORIZED: &str = "Unauthorized";
pub const MSG_NOT_FOUND: &str = "Not found";
pub const MSG_INTERNAL: &str = "Internal server error";

/// Development-only operator password; startup warns when it is still in use.
pub const DEV_ADMIN_PASSWORD: &str = "dev-only-change-me";
pub const DEV_ADMIN_EMAIL: &str = "admin@example.com";
