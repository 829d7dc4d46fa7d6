//! Shared contracts for the water authority dashboard.
//!
//! Everything here is plain Rust with no browser dependencies: roles and the
//! static navigation catalog, the session/router/page-resolver state machine
//! and the generic entry-form validation and submission workflow. The
//! `frontend` crate renders it.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
