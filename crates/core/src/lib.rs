//! ShotWeave domain logic.
//!
//! Everything in this crate is free of I/O except the risk-model artifact
//! helpers, so it can be used by the API, tests and any future CLI tooling.

pub mod breakdown;
pub mod error;
pub mod lvr;
pub mod operations;
pub mod risk;
pub mod roles;
pub mod types;
