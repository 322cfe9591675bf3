//! Row structs and DTOs.
//!
//! Each submodule holds a `FromRow` entity matching the table and a
//! `Create*` DTO for inserts.

pub mod user;
pub mod vendor;
