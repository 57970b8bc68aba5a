//! Repository layer: entity-scoped database operations.

mod advocate;
mod specialty;

use chrono::NaiveDateTime;

// Re-export all public items from sub-modules
pub use advocate::*;
pub use specialty::*;

/// Format SQLite's `CURRENT_TIMESTAMP` default writes.
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a stored timestamp column. Unparseable values read as `None`.
pub(crate) fn parse_timestamp(value: Option<String>) -> Option<NaiveDateTime> {
    value.and_then(|s| NaiveDateTime::parse_from_str(&s, SQLITE_TIMESTAMP_FORMAT).ok())
}
