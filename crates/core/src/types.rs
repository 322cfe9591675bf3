//! Scalar aliases shared by every crate in the workspace.

/// Primary keys (`BIGSERIAL` columns).
pub type DbId = i64;

/// UTC timestamps as stored in `TIMESTAMPTZ` columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A calendar day on the shooting schedule (serialized as ISO 8601).
pub type ShootDate = chrono::NaiveDate;
