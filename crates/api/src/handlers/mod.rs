pub mod auth;
pub mod breakdown;
pub mod operations;
pub mod risk;
pub mod vendors;
