use chrono::{SecondsFormat, Utc};

pub mod project;
pub mod slide_content;
pub mod user;

/// Current time as RFC 3339 UTC text with microseconds. All timestamp
/// columns store this format, so lexicographic order is time order.
pub(crate) fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
