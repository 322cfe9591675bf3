//! Dashboard role names.
//!
//! These are stored verbatim in `users.role` and embedded in access tokens,
//! so they must stay in sync with the client's role picker.

pub const ROLE_PRODUCER: &str = "Producer/CEO";
pub const ROLE_LINE_PRODUCER: &str = "Line Producer";
pub const ROLE_EXECUTOR: &str = "1st AD/Unit Manager";
pub const ROLE_CREATIVE: &str = "VFX Supervisor/Director";

/// Every role a user may sign up with.
pub const ALL_ROLES: [&str; 4] = [
    ROLE_PRODUCER,
    ROLE_LINE_PRODUCER,
    ROLE_EXECUTOR,
    ROLE_CREATIVE,
];

/// Whether `role` is one of the known dashboard roles (exact match).
pub fn is_known_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}
