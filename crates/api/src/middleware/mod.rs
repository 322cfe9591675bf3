//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac`] -- One extractor per dashboard, each admitting its own role plus
//!   `Producer/CEO`.

pub mod auth;
pub mod rbac;
