//! # Domain Models
//!
//! Pure types shared by every Folio crate: configuration, the slice registry and the
//! user-facing message strings.
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod registry;
