//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod user_repo;
pub mod vendor_repo;

pub use user_repo::UserRepo;
pub use vendor_repo::VendorRepo;
