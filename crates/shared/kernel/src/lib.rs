//! Kernel utilities shared across slices.
//!
//! Keep this crate lightweight: it owns the shared [`server::state::ApiState`], the layered
//! config loader and the HTTP error surface every slice answers with.
//!
//! ## Config loading
//! ```rust,no_run
//! use folio_kernel::config::load_config;
//! use folio_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap_or_default();
//! ```

pub mod config;
pub mod server;

pub use folio_domain as domain;
